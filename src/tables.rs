//! Leaf lookup tables.

/// The fixed Gaussian white-noise sequence from the AV1 film grain
/// algorithm (section 7.18.3). Zero-mean, standard deviation 512, every
/// entry a multiple of 4 in [-2048, 2044]. Grain samples are drawn from
/// this table by an 11-bit LFSR index.
pub static GAUSSIAN_SEQUENCE: [i16; 2048] = [
    56, 568, -180, 172, 124, -84, 172, -64, -900, 24, 820, 224, 1248, 996,
    272, -8, -916, -388, -732, -104, 444, 548, 340, 968, -512, 284, -652, -576,
    -588, 868, -604, 400, -416, -308, -684, 204, -468, 816, -508, 756, -8,
    -856, 572, 716, 24, 496, -484, -500, -172, -288, -364, 308, -136, 760,
    -244, -452, 76, -540, 436, -856, 244, 1384, 148, 536, 92, -132, 428, -856,
    60, 232, -208, 328, 524, 424, 1016, -36, -52, 268, -328, 100, 912, -784,
    -172, -292, -684, -1088, -1256, -128, -392, -644, 628, -228, -1172, -188,
    272, 216, 408, 284, 96, -336, 432, -172, 768, -492, 184, -204, 420, 452,
    252, -344, -296, -268, 12, -1096, 608, 60, -112, 396, 204, -592, -244,
    388, 160, -496, -1120, 300, -752, -904, -100, 788, 84, -340, -24, 392,
    368, -696, 316, -356, -744, 688, -124, 116, 612, -32, 704, -128, 308, 72,
    -208, -964, 704, 612, 196, -160, -264, 676, 936, -140, 144, -628, -624,
    -148, 140, 368, 144, -220, -680, 616, 372, 508, -224, 460, 228, 452, 384,
    -492, 432, 308, 160, 1128, -1132, 224, -384, -328, -132, 604, -220, -528,
    96, 516, 120, -360, 220, -868, 144, -68, -88, -268, -104, 248, -104, -964,
    -840, -900, 40, 112, -360, 728, -20, 184, 300, 304, -284, -588, 420, -748,
    -212, -864, -20, -436, -752, -796, 0, -48, 448, 528, 200, -396, 120, 856,
    612, -128, -132, -676, -92, -116, 180, 812, 440, -1560, 220, 372, 428,
    -692, -536, -132, 728, -752, 260, -32, 556, 652, 236, -292, -8, 104, -288,
    124, -512, 184, -876, -1120, -684, -48, 296, 96, 148, -168, -424, -152,
    -760, 288, -16, 64, -184, 400, 200, 84, -936, -112, -480, -484, -488, 564,
    12, 1212, 500, 80, -516, 672, 8, 916, -836, 288, 32, 132, -760, -112, 444,
    -332, -280, 528, 24, 40, 220, -4, 188, 220, 340, 228, 44, 424, -172, 356,
    16, 808, -220, 388, 224, -796, 560, 992, 476, 708, 88, -972, -88, -68,
    108, 500, 476, -372, 8, 424, 360, -64, -592, 648, 1108, 252, -1236, 1284,
    -956, -32, 944, 104, 316, -212, -1524, 772, 860, -556, 292, 128, -1280,
    68, 592, -40, -252, -840, 436, -40, -688, 156, -792, 32, -16, -368, -108,
    -872, 1056, -232, -508, 20, -204, -208, 12, -44, 344, -1104, -1388, -76,
    -488, 116, 172, 100, -836, -160, 28, -664, 752, -652, -276, -244, -84,
    -24, -764, 424, 992, -592, 336, -1040, -392, -492, 196, -464, -956, -384,
    -984, -268, -204, -400, -40, -496, -288, -320, -380, -108, 488, -132, 344,
    -320, 24, -136, -436, -8, 96, 888, 72, -96, 256, -268, -1256, 804, -1148,
    16, 564, -124, 128, -332, 1024, 604, 540, -240, -996, 284, 260, 248, -252,
    244, -160, -504, 512, -140, 132, -328, 676, 624, -56, 124, -4, -912, -264,
    -544, -840, -596, -208, -92, -500, 36, 532, 652, -168, -540, 352, -312,
    344, -1332, -180, -416, 524, -400, -448, -108, 944, -180, 160, -372, -740,
    -296, -88, -148, -548, 732, -172, 228, 272, -412, -92, -560, 12, 960, 56,
    -112, 184, -604, 484, 52, 72, 132, 156, 416, -300, -92, 604, -172, -244,
    656, 152, -620, -1188, -420, 56, -336, -136, 76, -264, 236, -328, 260,
    -1440, 220, -492, -420, 508, -220, 468, 724, -268, -324, -296, 308, -216,
    -888, -300, 1052, 200, -148, 204, -524, -24, 904, 84, -296, 512, 520, 436,
    648, 1616, 284, 72, 972, -440, -304, 0, -176, 648, 1028, -188, 268, -1052,
    -48, 136, -1004, 288, -752, 624, 1180, -396, -512, -880, 620, 1200, 52,
    -116, 116, 156, 880, 244, -88, -272, 336, 200, -260, -56, 464, 500, 756,
    -436, -584, -836, -72, 172, 216, 1292, -712, -128, 176, 284, -292, 452,
    -180, 228, -812, -80, -52, -672, 432, 216, -356, 268, 1248, 276, 124, -1004,
    300, 16, -20, 624, -348, -684, -428, -504, 424, -396, -720, -228, 52, 104,
    400, -92, -432, -208, -888, 412, -100, -28, 428, 212, 120, 312, -28, 268,
    16, -252, 272, -192, -348, -508, 76, -1192, 432, -404, -368, -304, 380,
    -340, -464, -124, 464, -376, 636, 300, -344, -384, -536, -16, -612, -696,
    -632, -380, 264, -372, 56, -724, -156, -152, -1328, -88, 276, -1220, 124,
    -604, 604, -572, -696, -848, -904, 1040, -364, -176, -336, -72, -320, -584,
    -224, -584, 792, -304, -616, -404, -640, 52, -560, 64, -488, 976, 1080,
    0, -4, 120, -604, 1132, 400, -684, -56, 872, -776, -1188, -48, 596, 732,
    -312, -284, 0, 260, 512, -216, -296, -936, 548, -384, -304, 176, 376, 440,
    -744, 368, -280, 76, -100, -580, 292, -140, 564, 588, -100, -464, -272,
    272, -268, -160, 752, -432, 236, 500, 80, -588, -104, -884, 448, -44, 232,
    -372, 1280, 1084, 4, 660, -476, -308, 620, -220, 68, 600, 292, -252, -780,
    -316, 168, -156, -4, -520, 684, 368, -380, -688, 80, 676, 384, 128, 532,
    -416, 760, 148, 228, -240, -1000, -124, -216, 144, -520, -156, -264, 812,
    128, -196, 652, 52, -788, 476, -40, -604, -600, 412, 576, 888, -916, 388,
    -672, 548, -648, 516, 300, 88, 740, 100, 356, -164, -324, -580, -104, -300,
    844, 648, 392, 860, -528, 668, 552, -96, 232, -492, 544, 8, 244, 108, 288,
    -484, -696, -216, -1160, -112, 440, 116, -200, -176, 384, 16, -1076, -376,
    -376, 612, -980, 128, -160, -52, -1304, 336, 628, -116, 1080, -784, -144,
    52, -180, 96, -216, -812, -44, 352, -392, 36, 48, 712, 476, -444, -432,
    -228, -860, 160, -268, 660, 216, -392, -560, -268, -612, -596, -208, 512,
    68, 4, -220, -644, 1408, -92, 988, -220, 528, -96, 524, 372, 160, 0, -416,
    -192, 288, 396, 160, -1000, 636, 844, -256, 204, -124, 1068, 688, 8, -12,
    176, -180, -148, -20, -4, -208, 704, 640, -172, 180, 176, 520, 448, 408,
    128, -216, -532, -352, 824, 164, 20, 216, -216, -76, 216, 828, 600, -552,
    -72, -632, -64, 512, -280, -196, 180, -152, -64, -268, -116, -244, 12,
    -76, 944, 808, 132, 36, 12, 644, 1116, 144, -548, 288, -652, 644, 660,
    -424, -376, -640, 24, -236, 264, 316, -388, 392, 1280, -232, 1036, -360,
    564, 156, -108, -388, -624, 164, -388, 200, 308, 116, -72, 32, 124, -84,
    -344, 84, 372, 348, 96, -172, -284, 256, 0, 464, 452, -776, 880, -44, -4,
    -476, -56, -148, 948, -164, 836, -48, 356, -360, 168, -332, -16, -816,
    -948, -164, -704, 416, 480, -1040, 188, 68, -864, -208, -256, 348, -192,
    468, 76, 908, 556, 420, -812, -32, 396, -984, -272, 688, -332, 268, -744,
    492, 1132, 444, -356, -1328, -704, -8, -540, -244, 364, -712, -484, -404,
    -208, 100, -640, -500, -284, -60, -168, -1496, 288, -416, -888, -60, 76,
    -708, 580, 704, -532, -340, -492, -544, 944, -116, -28, 340, -808, 760,
    260, 96, -720, 320, -104, -604, -792, -660, -288, 60, 40, 128, -320, 332,
    412, -208, 0, 424, -832, 464, 348, -320, 728, 168, 708, -456, 1800, -192,
    152, -900, -308, 364, 244, -320, -20, 84, -584, -412, 428, 68, 704, -192,
    -456, -80, -508, -88, -1212, -1576, -260, -252, 336, 964, -44, -248, -164,
    -444, -1024, 244, 236, -968, -604, 148, -600, -316, 256, -648, 56, 436,
    -452, 108, -640, -640, 300, 44, -48, -528, 56, -320, -456, -756, -284,
    -96, -308, -140, -28, -236, -536, 1324, 720, 776, 116, -16, -1524, -812,
    104, 348, -404, -364, 172, 1464, 680, -412, 540, 356, -608, 440, -740,
    -276, -780, 904, -804, 860, -140, -416, -596, 300, 396, -788, 600, -148,
    -100, -260, 540, -388, 240, 508, 48, -248, 676, 196, -276, -212, 688, 44,
    -208, -116, -20, -200, -668, 720, -700, 572, -312, 644, -388, -220, 260,
    576, 744, -640, -76, -384, 756, 772, 184, 348, -224, 432, 196, 136, 468,
    -268, -1360, 432, 236, -1192, -872, -144, 548, -820, -508, -52, 228, -208,
    404, -396, 100, -772, -604, -104, 432, -148, -52, -880, 372, -212, -752,
    -1236, -108, -864, 736, 48, -848, -20, 272, 756, 156, -300, 236, 504, -224,
    -740, -492, -836, 556, 56, -76, 320, 152, -364, -20, 48, -132, 776, -740,
    644, -836, 716, 560, -968, -516, -160, -784, 356, -56, -116, 296, 88, 216,
    -32, 220, 304, -348, 96, 800, 44, -4, 732, -144, 108, -508, -528, 756,
    368, -188, -752, -340, 28, -256, 864, 176, -600, 496, -88, 364, 380, 536,
    -1152, 508, 500, -360, -900, 1088, 396, 1248, 524, -724, 324, -16, 236,
    -388, 84, 260, -256, -204, 452, 52, -604, 488, 556, -228, -464, -960, 196,
    -792, -396, 200, -40, 280, 352, 320, -52, 396, 192, -340, 36, 228, 736,
    -508, -836, -244, -24, 72, -52, -156, -1292, -612, 1116, -972, 244, 504,
    704, 448, 40, -476, 564, -892, -64, -352, 488, -60, -1032, 304, 660, -64,
    440, 88, 228, 232, -564, -436, -280, 12, -940, 148, 544, 456, -248, 308,
    628, -260, 36, 804, 432, -316, 384, 192, 16, 4, -100, 504, -124, -236,
    -256, 660, 408, 132, -24, -616, 220, -296, 1168, 172, 92, -428, 572, 372,
    -960, -672, -244, -420, -80, 108, -672, -404, -376, -952, 632, 140, -148,
    -72, -812, -804, 352, -228, -380, 248, 84, 260, -348, -188, 188, 412, 248,
    608, -364, 152, 956, 344, -428, 624, -880, 232, -880, -600, 832, -640,
    -680, 184, 420, -164, 504, 420, 600, -832, 136, -160, -228, -772, -376,
    188, 592, 1104, 508, 128, 724, -152, -68, -64, -312, -220, 288, 892, 228,
    144, 64, -844, 344, -48, -712, -24, 524, -284, -100, -592, -268, -348,
    608, 296, -172, 532, -648, -56, -588, -132, 172, 104, 100, -644, -604,
    -188, -772, 124, -140, -892, -316, -44, -552, 168, -188, 352, 140, 32,
    624, -92, -452, 36, -856, -828, -132, -224, -732, 232, -560, 216, 436,
    -404, -136, 256, 332, -280, -100, 148, -424, 332, -468, -516, -988, -584,
    132, 68, 632, 452, -696, -372, -44, 404, -336, -388, 352, -248, 108, 112,
    512, 588, -424, -260, -528, 244, 556, 244, -604, 268, 624, 60, 148, 240,
    92, -128, -532, -404, 52, 528, -368, 420, 1236, 708, -420, -332, 684, 296,
    764, 328, 868, -124, -436, 184, -324, -388, -324, 240, 532, -108, 560,
    568, -404, -24, -476, 1536, 84, 496, 1264, -528, -40, -768, -748, 532,
    -44, -256, 508, -564, -92, 556, -12, -564, -408, -36, -148, 232, 24, -552,
    780, -264, -432, 4, 284, -28, -400, 116, -1228, -436, 164, -36, 376, 844,
    -1152, 936, 636, 192, -240, -628, -460, 216, -736, -396, -8, -432, 684,
    436, -120, 8, -220, 428, -128, -560, -368, 148, 356, 1348, 172, -500, -512,
    676, -352, -516, 276, 404, 168, 184, -1232, -972, -508, -816, 1128, 40,
    192, -572, -120, 280, -1088, 1140, -380, 224, 300, 396, 272, -708, -24,
    916, -208, 644, -188, 440, -328, 80, -732, -780, 476, 480, -316, -156,
    -320, -672, -244, -328, 400, 1140, 304, -412, 624, -268, -372, -664, -464,
    200, -516, -24, 508, 504, -832, 8, 892, -400, 704, -416, 456, -180, -484,
    -952, 576, -216, -332, -340, -228, -376, 732, 916, -148, -640, -112, 384,
    348, -504, 276, -336, 468, -140, 872, -84, -312, -92, 312, -116, -640,
    144, -188, 820, 932, -732, 32, 376, 784, 76, 548, 56, -764, 616, 160, -424,
    212, -528, 452, -136, 276, -180, 1112, -288, -72, 248, -816, 160, 228,
    -8, -404, -1076, 228, -164, 236, 136, -480, 16, 316, 652, -20, 272, 584,
    -260, -36, -284, -96, 360, -600, 980, -252, 24, -224, -408, 396, -88, -652,
    -380, -12, 44, -1256, -112, 84, 656, 480, -548, 96, -124, -712, 1560, 1312,
    -212, 1012, -240, -132, 660, -12, -12, -300, -728, 944, -580, -316, -664,
    -232, -236, 376, 604, 356, -408, 792, 208, -124, 544, 1080, 364, -564,
    604, -144, 36, 88, -648, -528, 16, -680, 864, 204, -4, -268, 508, -344,
    476, -304, -240, -368, 36, 804, 228, 164, 488, -636, -576, 604, 344, -168,
    352, -628, -612, 392, 756, 476, -88, -300, -168, 496, -432, -12, -624,
    -328, -364, 40, -36, -860, 1072, 148, 768, 1076, -636, 16, 580, -220, 132,
    -796, 64, 616, -52, 288, -432, 952, -648, 88, 332, -244, 144, 312, 108,
    -216, -1136, 12, 100, 232, -408, 428, -204, 108, 472, -516, 164, -524,
    -412, -292, 680, 524, 468, -312, 220, -400, 156, -292, -308, -316, 1016,
    -520, -20, -28, 120, -460, -296, -692, -184, -436, -300, -260, 600, 296,
    436, -888, -260, -16, 104, 204, 156, 960, -84, 52, -108, 768, 212, 400,
    996,
];
