//! Named colors of the web-browser palette.

use super::color::Color;

impl Color {
    /// Alpha 0 with black RGB. The clear value of fresh sprite buffers.
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub const PINK: Color = Color(0xFFFF_C0CB);
    pub const LIGHT_PINK: Color = Color(0xFFFF_B6C1);
    pub const HOT_PINK: Color = Color(0xFFFF_69B4);
    pub const DEEP_PINK: Color = Color(0xFFFF_1493);
    pub const PALE_VIOLET_RED: Color = Color(0xFFDB_7093);
    pub const MEDIUM_VIOLET_RED: Color = Color(0xFFC7_1585);
    pub const LIGHT_SALMON: Color = Color(0xFFFF_A07A);
    pub const SALMON: Color = Color(0xFFFA_8072);
    pub const DARK_SALMON: Color = Color(0xFFE9_967A);
    pub const LIGHT_CORAL: Color = Color(0xFFF0_8080);
    pub const INDIAN_RED: Color = Color(0xFFCD_5C5C);
    pub const CRIMSON: Color = Color(0xFFDC_143C);
    pub const FIRE_BRICK: Color = Color(0xFFB2_2222);
    pub const DARK_RED: Color = Color(0xFF8B_0000);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const ORANGE_RED: Color = Color(0xFFFF_4500);
    pub const TOMATO: Color = Color(0xFFFF_6347);
    pub const CORAL: Color = Color(0xFFFF_7F50);
    pub const DARK_ORANGE: Color = Color(0xFFFF_8C00);
    pub const ORANGE: Color = Color(0xFFFF_A500);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    pub const LIGHT_YELLOW: Color = Color(0xFFFF_FFE0);
    pub const LEMON_CHIFFON: Color = Color(0xFFFF_FACD);
    pub const LIGHT_GOLDENROD_YELLOW: Color = Color(0xFFFA_FAD2);
    pub const PAPAYA_WHIP: Color = Color(0xFFFF_EFD5);
    pub const MOCCASIN: Color = Color(0xFFFF_E4B5);
    pub const PEACH_PUFF: Color = Color(0xFFFF_DAB9);
    pub const PALE_GOLDENROD: Color = Color(0xFFEE_E8AA);
    pub const KHAKI: Color = Color(0xFFF0_E68C);
    pub const DARK_KHAKI: Color = Color(0xFFBD_B76B);
    pub const GOLD: Color = Color(0xFFFF_D700);
    pub const CORNSILK: Color = Color(0xFFFF_F8DC);
    pub const BLANCHED_ALMOND: Color = Color(0xFFFF_EBCD);
    pub const BISQUE: Color = Color(0xFFFF_E4C4);
    pub const NAVAJO_WHITE: Color = Color(0xFFFF_DEAD);
    pub const WHEAT: Color = Color(0xFFF5_DEB3);
    pub const BURLY_WOOD: Color = Color(0xFFDE_B887);
    pub const TAN: Color = Color(0xFFD2_B48C);
    pub const ROSY_BROWN: Color = Color(0xFFBC_8F8F);
    pub const SANDY_BROWN: Color = Color(0xFFF4_A460);
    pub const GOLDENROD: Color = Color(0xFFDA_A520);
    pub const DARK_GOLDENROD: Color = Color(0xFFB8_860B);
    pub const PERU: Color = Color(0xFFCD_853F);
    pub const CHOCOLATE: Color = Color(0xFFD2_691E);
    pub const SADDLE_BROWN: Color = Color(0xFF8B_4513);
    pub const SIENNA: Color = Color(0xFFA0_522D);
    pub const BROWN: Color = Color(0xFFA5_2A2A);
    pub const MAROON: Color = Color(0xFF80_0000);
    pub const DARK_OLIVE_GREEN: Color = Color(0xFF55_6B2F);
    pub const OLIVE: Color = Color(0xFF80_8000);
    pub const OLIVE_DRAB: Color = Color(0xFF6B_8E23);
    pub const YELLOW_GREEN: Color = Color(0xFF9A_CD32);
    pub const LIME_GREEN: Color = Color(0xFF32_CD32);
    pub const LIME: Color = Color(0xFF00_FF00);
    pub const LAWN_GREEN: Color = Color(0xFF7C_FC00);
    pub const CHARTREUSE: Color = Color(0xFF7F_FF00);
    pub const GREEN_YELLOW: Color = Color(0xFFAD_FF2F);
    pub const SPRING_GREEN: Color = Color(0xFF00_FF7F);
    pub const MEDIUM_SPRING_GREEN: Color = Color(0xFF00_FA9A);
    pub const LIGHT_GREEN: Color = Color(0xFF90_EE90);
    pub const PALE_GREEN: Color = Color(0xFF98_FB98);
    pub const DARK_SEA_GREEN: Color = Color(0xFF8F_BC8F);
    pub const MEDIUM_SEA_GREEN: Color = Color(0xFF3C_B371);
    pub const SEA_GREEN: Color = Color(0xFF2E_8B57);
    pub const FOREST_GREEN: Color = Color(0xFF22_8B22);
    pub const GREEN: Color = Color(0xFF00_8000);
    pub const DARK_GREEN: Color = Color(0xFF00_6400);
    pub const MEDIUM_AQUAMARINE: Color = Color(0xFF66_CDAA);
    pub const AQUA: Color = Color(0xFF00_FFFF);
    pub const CYAN: Color = Color(0xFF00_FFFF);
    pub const LIGHT_CYAN: Color = Color(0xFFE0_FFFF);
    pub const PALE_TURQUOISE: Color = Color(0xFFAF_EEEE);
    pub const AQUAMARINE: Color = Color(0xFF7F_FFD4);
    pub const TURQUOISE: Color = Color(0xFF40_E0D0);
    pub const MEDIUM_TURQUOISE: Color = Color(0xFF48_D1CC);
    pub const DARK_TURQUOISE: Color = Color(0xFF00_CED1);
    pub const LIGHT_SEA_GREEN: Color = Color(0xFF20_B2AA);
    pub const CADET_BLUE: Color = Color(0xFF5F_9EA0);
    pub const DARK_CYAN: Color = Color(0xFF00_8B8B);
    pub const TEAL: Color = Color(0xFF00_8080);
    pub const LIGHT_STEEL_BLUE: Color = Color(0xFFB0_C4DE);
    pub const POWDER_BLUE: Color = Color(0xFFB0_E0E6);
    pub const LIGHT_BLUE: Color = Color(0xFFAD_D8E6);
    pub const SKY_BLUE: Color = Color(0xFF87_CEEB);
    pub const LIGHT_SKY_BLUE: Color = Color(0xFF87_CEFA);
    pub const DEEP_SKY_BLUE: Color = Color(0xFF00_BFFF);
    pub const DODGER_BLUE: Color = Color(0xFF1E_90FF);
    pub const CORNFLOWER_BLUE: Color = Color(0xFF64_95ED);
    pub const STEEL_BLUE: Color = Color(0xFF46_82B4);
    pub const ROYAL_BLUE: Color = Color(0xFF41_69E1);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const MEDIUM_BLUE: Color = Color(0xFF00_00CD);
    pub const DARK_BLUE: Color = Color(0xFF00_008B);
    pub const NAVY: Color = Color(0xFF00_0080);
    pub const MIDNIGHT_BLUE: Color = Color(0xFF19_1970);
    pub const LAVENDER: Color = Color(0xFFE6_E6FA);
    pub const THISTLE: Color = Color(0xFFD8_BFD8);
    pub const PLUM: Color = Color(0xFFDD_A0DD);
    pub const VIOLET: Color = Color(0xFFEE_82EE);
    pub const ORCHID: Color = Color(0xFFDA_70D6);
    pub const FUCHSIA: Color = Color(0xFFFF_00FF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);
    pub const MEDIUM_ORCHID: Color = Color(0xFFBA_55D3);
    pub const MEDIUM_PURPLE: Color = Color(0xFF93_70DB);
    pub const BLUE_VIOLET: Color = Color(0xFF8A_2BE2);
    pub const DARK_VIOLET: Color = Color(0xFF94_00D3);
    pub const DARK_ORCHID: Color = Color(0xFF99_32CC);
    pub const DARK_MAGENTA: Color = Color(0xFF8B_008B);
    pub const PURPLE: Color = Color(0xFF80_0080);
    pub const INDIGO: Color = Color(0xFF4B_0082);
    pub const DARK_SLATE_BLUE: Color = Color(0xFF48_3D8B);
    pub const SLATE_BLUE: Color = Color(0xFF6A_5ACD);
    pub const MEDIUM_SLATE_BLUE: Color = Color(0xFF7B_68EE);
    pub const REBECCA_PURPLE: Color = Color(0xFF66_3399);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const SNOW: Color = Color(0xFFFF_FAFA);
    pub const HONEYDEW: Color = Color(0xFFF0_FFF0);
    pub const MINT_CREAM: Color = Color(0xFFF5_FFFA);
    pub const AZURE: Color = Color(0xFFF0_FFFF);
    pub const ALICE_BLUE: Color = Color(0xFFF0_F8FF);
    pub const GHOST_WHITE: Color = Color(0xFFF8_F8FF);
    pub const WHITE_SMOKE: Color = Color(0xFFF5_F5F5);
    pub const SEASHELL: Color = Color(0xFFFF_F5EE);
    pub const BEIGE: Color = Color(0xFFF5_F5DC);
    pub const OLD_LACE: Color = Color(0xFFFD_F5E6);
    pub const FLORAL_WHITE: Color = Color(0xFFFF_FAF0);
    pub const IVORY: Color = Color(0xFFFF_FFF0);
    pub const ANTIQUE_WHITE: Color = Color(0xFFFA_EBD7);
    pub const LINEN: Color = Color(0xFFFA_F0E6);
    pub const LAVENDER_BLUSH: Color = Color(0xFFFF_F0F5);
    pub const MISTY_ROSE: Color = Color(0xFFFF_E4E1);
    pub const GAINSBORO: Color = Color(0xFFDC_DCDC);
    pub const LIGHT_GRAY: Color = Color(0xFFD3_D3D3);
    pub const SILVER: Color = Color(0xFFC0_C0C0);
    pub const DARK_GRAY: Color = Color(0xFFA9_A9A9);
    pub const GRAY: Color = Color(0xFF80_8080);
    pub const DIM_GRAY: Color = Color(0xFF69_6969);
    pub const LIGHT_SLATE_GRAY: Color = Color(0xFF77_8899);
    pub const SLATE_GRAY: Color = Color(0xFF70_8090);
    pub const DARK_SLATE_GRAY: Color = Color(0xFF2F_4F4F);
    pub const BLACK: Color = Color(0xFF00_0000);
}
