//! Lookup tables used by the trigonometric primitive

/// The number of points in the sine table, MUST be a power of 2
pub const SINE_LUT_SIZE: usize = 1024;

/// One full cycle of a sine wave in `[-1.0, +1.0]`, the point after the last one is the first one again
pub const SINE_TABLE: [f32; SINE_LUT_SIZE] = [
    0.000000000_f32, 0.006135885_f32, 0.012271538_f32, 0.018406730_f32, 0.024541229_f32, 0.030674803_f32,
    0.036807223_f32, 0.042938257_f32, 0.049067674_f32, 0.055195244_f32, 0.061320736_f32, 0.067443920_f32,
    0.073564564_f32, 0.079682438_f32, 0.085797312_f32, 0.091908956_f32, 0.098017140_f32, 0.104121634_f32,
    0.110222207_f32, 0.116318631_f32, 0.122410675_f32, 0.128498111_f32, 0.134580709_f32, 0.140658239_f32,
    0.146730474_f32, 0.152797185_f32, 0.158858143_f32, 0.164913120_f32, 0.170961889_f32, 0.177004220_f32,
    0.183039888_f32, 0.189068664_f32, 0.195090322_f32, 0.201104635_f32, 0.207111376_f32, 0.213110320_f32,
    0.219101240_f32, 0.225083911_f32, 0.231058108_f32, 0.237023606_f32, 0.242980180_f32, 0.248927606_f32,
    0.254865660_f32, 0.260794118_f32, 0.266712757_f32, 0.272621355_f32, 0.278519689_f32, 0.284407537_f32,
    0.290284677_f32, 0.296150888_f32, 0.302005949_f32, 0.307849640_f32, 0.313681740_f32, 0.319502031_f32,
    0.325310292_f32, 0.331106306_f32, 0.336889853_f32, 0.342660717_f32, 0.348418680_f32, 0.354163525_f32,
    0.359895037_f32, 0.365612998_f32, 0.371317194_f32, 0.377007410_f32, 0.382683432_f32, 0.388345047_f32,
    0.393992040_f32, 0.399624200_f32, 0.405241314_f32, 0.410843171_f32, 0.416429560_f32, 0.422000271_f32,
    0.427555093_f32, 0.433093819_f32, 0.438616239_f32, 0.444122145_f32, 0.449611330_f32, 0.455083587_f32,
    0.460538711_f32, 0.465976496_f32, 0.471396737_f32, 0.476799230_f32, 0.482183772_f32, 0.487550160_f32,
    0.492898192_f32, 0.498227667_f32, 0.503538384_f32, 0.508830143_f32, 0.514102744_f32, 0.519355990_f32,
    0.524589683_f32, 0.529803625_f32, 0.534997620_f32, 0.540171473_f32, 0.545324988_f32, 0.550457973_f32,
    0.555570233_f32, 0.560661576_f32, 0.565731811_f32, 0.570780746_f32, 0.575808191_f32, 0.580813958_f32,
    0.585797857_f32, 0.590759702_f32, 0.595699304_f32, 0.600616479_f32, 0.605511041_f32, 0.610382806_f32,
    0.615231591_f32, 0.620057212_f32, 0.624859488_f32, 0.629638239_f32, 0.634393284_f32, 0.639124445_f32,
    0.643831543_f32, 0.648514401_f32, 0.653172843_f32, 0.657806693_f32, 0.662415778_f32, 0.666999922_f32,
    0.671558955_f32, 0.676092704_f32, 0.680600998_f32, 0.685083668_f32, 0.689540545_f32, 0.693971461_f32,
    0.698376249_f32, 0.702754744_f32, 0.707106781_f32, 0.711432196_f32, 0.715730825_f32, 0.720002508_f32,
    0.724247083_f32, 0.728464390_f32, 0.732654272_f32, 0.736816569_f32, 0.740951125_f32, 0.745057785_f32,
    0.749136395_f32, 0.753186799_f32, 0.757208847_f32, 0.761202385_f32, 0.765167266_f32, 0.769103338_f32,
    0.773010453_f32, 0.776888466_f32, 0.780737229_f32, 0.784556597_f32, 0.788346428_f32, 0.792106577_f32,
    0.795836905_f32, 0.799537269_f32, 0.803207531_f32, 0.806847554_f32, 0.810457198_f32, 0.814036330_f32,
    0.817584813_f32, 0.821102515_f32, 0.824589303_f32, 0.828045045_f32, 0.831469612_f32, 0.834862875_f32,
    0.838224706_f32, 0.841554977_f32, 0.844853565_f32, 0.848120345_f32, 0.851355193_f32, 0.854557988_f32,
    0.857728610_f32, 0.860866939_f32, 0.863972856_f32, 0.867046246_f32, 0.870086991_f32, 0.873094978_f32,
    0.876070094_f32, 0.879012226_f32, 0.881921264_f32, 0.884797098_f32, 0.887639620_f32, 0.890448723_f32,
    0.893224301_f32, 0.895966250_f32, 0.898674466_f32, 0.901348847_f32, 0.903989293_f32, 0.906595705_f32,
    0.909167983_f32, 0.911706032_f32, 0.914209756_f32, 0.916679060_f32, 0.919113852_f32, 0.921514039_f32,
    0.923879533_f32, 0.926210242_f32, 0.928506080_f32, 0.930766961_f32, 0.932992799_f32, 0.935183510_f32,
    0.937339012_f32, 0.939459224_f32, 0.941544065_f32, 0.943593458_f32, 0.945607325_f32, 0.947585591_f32,
    0.949528181_f32, 0.951435021_f32, 0.953306040_f32, 0.955141168_f32, 0.956940336_f32, 0.958703475_f32,
    0.960430519_f32, 0.962121404_f32, 0.963776066_f32, 0.965394442_f32, 0.966976471_f32, 0.968522094_f32,
    0.970031253_f32, 0.971503891_f32, 0.972939952_f32, 0.974339383_f32, 0.975702130_f32, 0.977028143_f32,
    0.978317371_f32, 0.979569766_f32, 0.980785280_f32, 0.981963869_f32, 0.983105487_f32, 0.984210092_f32,
    0.985277642_f32, 0.986308097_f32, 0.987301418_f32, 0.988257568_f32, 0.989176510_f32, 0.990058210_f32,
    0.990902635_f32, 0.991709754_f32, 0.992479535_f32, 0.993211949_f32, 0.993906970_f32, 0.994564571_f32,
    0.995184727_f32, 0.995767414_f32, 0.996312612_f32, 0.996820299_f32, 0.997290457_f32, 0.997723067_f32,
    0.998118113_f32, 0.998475581_f32, 0.998795456_f32, 0.999077728_f32, 0.999322385_f32, 0.999529418_f32,
    0.999698819_f32, 0.999830582_f32, 0.999924702_f32, 0.999981175_f32, 1.000000000_f32, 0.999981175_f32,
    0.999924702_f32, 0.999830582_f32, 0.999698819_f32, 0.999529418_f32, 0.999322385_f32, 0.999077728_f32,
    0.998795456_f32, 0.998475581_f32, 0.998118113_f32, 0.997723067_f32, 0.997290457_f32, 0.996820299_f32,
    0.996312612_f32, 0.995767414_f32, 0.995184727_f32, 0.994564571_f32, 0.993906970_f32, 0.993211949_f32,
    0.992479535_f32, 0.991709754_f32, 0.990902635_f32, 0.990058210_f32, 0.989176510_f32, 0.988257568_f32,
    0.987301418_f32, 0.986308097_f32, 0.985277642_f32, 0.984210092_f32, 0.983105487_f32, 0.981963869_f32,
    0.980785280_f32, 0.979569766_f32, 0.978317371_f32, 0.977028143_f32, 0.975702130_f32, 0.974339383_f32,
    0.972939952_f32, 0.971503891_f32, 0.970031253_f32, 0.968522094_f32, 0.966976471_f32, 0.965394442_f32,
    0.963776066_f32, 0.962121404_f32, 0.960430519_f32, 0.958703475_f32, 0.956940336_f32, 0.955141168_f32,
    0.953306040_f32, 0.951435021_f32, 0.949528181_f32, 0.947585591_f32, 0.945607325_f32, 0.943593458_f32,
    0.941544065_f32, 0.939459224_f32, 0.937339012_f32, 0.935183510_f32, 0.932992799_f32, 0.930766961_f32,
    0.928506080_f32, 0.926210242_f32, 0.923879533_f32, 0.921514039_f32, 0.919113852_f32, 0.916679060_f32,
    0.914209756_f32, 0.911706032_f32, 0.909167983_f32, 0.906595705_f32, 0.903989293_f32, 0.901348847_f32,
    0.898674466_f32, 0.895966250_f32, 0.893224301_f32, 0.890448723_f32, 0.887639620_f32, 0.884797098_f32,
    0.881921264_f32, 0.879012226_f32, 0.876070094_f32, 0.873094978_f32, 0.870086991_f32, 0.867046246_f32,
    0.863972856_f32, 0.860866939_f32, 0.857728610_f32, 0.854557988_f32, 0.851355193_f32, 0.848120345_f32,
    0.844853565_f32, 0.841554977_f32, 0.838224706_f32, 0.834862875_f32, 0.831469612_f32, 0.828045045_f32,
    0.824589303_f32, 0.821102515_f32, 0.817584813_f32, 0.814036330_f32, 0.810457198_f32, 0.806847554_f32,
    0.803207531_f32, 0.799537269_f32, 0.795836905_f32, 0.792106577_f32, 0.788346428_f32, 0.784556597_f32,
    0.780737229_f32, 0.776888466_f32, 0.773010453_f32, 0.769103338_f32, 0.765167266_f32, 0.761202385_f32,
    0.757208847_f32, 0.753186799_f32, 0.749136395_f32, 0.745057785_f32, 0.740951125_f32, 0.736816569_f32,
    0.732654272_f32, 0.728464390_f32, 0.724247083_f32, 0.720002508_f32, 0.715730825_f32, 0.711432196_f32,
    0.707106781_f32, 0.702754744_f32, 0.698376249_f32, 0.693971461_f32, 0.689540545_f32, 0.685083668_f32,
    0.680600998_f32, 0.676092704_f32, 0.671558955_f32, 0.666999922_f32, 0.662415778_f32, 0.657806693_f32,
    0.653172843_f32, 0.648514401_f32, 0.643831543_f32, 0.639124445_f32, 0.634393284_f32, 0.629638239_f32,
    0.624859488_f32, 0.620057212_f32, 0.615231591_f32, 0.610382806_f32, 0.605511041_f32, 0.600616479_f32,
    0.595699304_f32, 0.590759702_f32, 0.585797857_f32, 0.580813958_f32, 0.575808191_f32, 0.570780746_f32,
    0.565731811_f32, 0.560661576_f32, 0.555570233_f32, 0.550457973_f32, 0.545324988_f32, 0.540171473_f32,
    0.534997620_f32, 0.529803625_f32, 0.524589683_f32, 0.519355990_f32, 0.514102744_f32, 0.508830143_f32,
    0.503538384_f32, 0.498227667_f32, 0.492898192_f32, 0.487550160_f32, 0.482183772_f32, 0.476799230_f32,
    0.471396737_f32, 0.465976496_f32, 0.460538711_f32, 0.455083587_f32, 0.449611330_f32, 0.444122145_f32,
    0.438616239_f32, 0.433093819_f32, 0.427555093_f32, 0.422000271_f32, 0.416429560_f32, 0.410843171_f32,
    0.405241314_f32, 0.399624200_f32, 0.393992040_f32, 0.388345047_f32, 0.382683432_f32, 0.377007410_f32,
    0.371317194_f32, 0.365612998_f32, 0.359895037_f32, 0.354163525_f32, 0.348418680_f32, 0.342660717_f32,
    0.336889853_f32, 0.331106306_f32, 0.325310292_f32, 0.319502031_f32, 0.313681740_f32, 0.307849640_f32,
    0.302005949_f32, 0.296150888_f32, 0.290284677_f32, 0.284407537_f32, 0.278519689_f32, 0.272621355_f32,
    0.266712757_f32, 0.260794118_f32, 0.254865660_f32, 0.248927606_f32, 0.242980180_f32, 0.237023606_f32,
    0.231058108_f32, 0.225083911_f32, 0.219101240_f32, 0.213110320_f32, 0.207111376_f32, 0.201104635_f32,
    0.195090322_f32, 0.189068664_f32, 0.183039888_f32, 0.177004220_f32, 0.170961889_f32, 0.164913120_f32,
    0.158858143_f32, 0.152797185_f32, 0.146730474_f32, 0.140658239_f32, 0.134580709_f32, 0.128498111_f32,
    0.122410675_f32, 0.116318631_f32, 0.110222207_f32, 0.104121634_f32, 0.098017140_f32, 0.091908956_f32,
    0.085797312_f32, 0.079682438_f32, 0.073564564_f32, 0.067443920_f32, 0.061320736_f32, 0.055195244_f32,
    0.049067674_f32, 0.042938257_f32, 0.036807223_f32, 0.030674803_f32, 0.024541229_f32, 0.018406730_f32,
    0.012271538_f32, 0.006135885_f32, 0.000000000_f32, -0.006135885_f32, -0.012271538_f32, -0.018406730_f32,
    -0.024541229_f32, -0.030674803_f32, -0.036807223_f32, -0.042938257_f32, -0.049067674_f32, -0.055195244_f32,
    -0.061320736_f32, -0.067443920_f32, -0.073564564_f32, -0.079682438_f32, -0.085797312_f32, -0.091908956_f32,
    -0.098017140_f32, -0.104121634_f32, -0.110222207_f32, -0.116318631_f32, -0.122410675_f32, -0.128498111_f32,
    -0.134580709_f32, -0.140658239_f32, -0.146730474_f32, -0.152797185_f32, -0.158858143_f32, -0.164913120_f32,
    -0.170961889_f32, -0.177004220_f32, -0.183039888_f32, -0.189068664_f32, -0.195090322_f32, -0.201104635_f32,
    -0.207111376_f32, -0.213110320_f32, -0.219101240_f32, -0.225083911_f32, -0.231058108_f32, -0.237023606_f32,
    -0.242980180_f32, -0.248927606_f32, -0.254865660_f32, -0.260794118_f32, -0.266712757_f32, -0.272621355_f32,
    -0.278519689_f32, -0.284407537_f32, -0.290284677_f32, -0.296150888_f32, -0.302005949_f32, -0.307849640_f32,
    -0.313681740_f32, -0.319502031_f32, -0.325310292_f32, -0.331106306_f32, -0.336889853_f32, -0.342660717_f32,
    -0.348418680_f32, -0.354163525_f32, -0.359895037_f32, -0.365612998_f32, -0.371317194_f32, -0.377007410_f32,
    -0.382683432_f32, -0.388345047_f32, -0.393992040_f32, -0.399624200_f32, -0.405241314_f32, -0.410843171_f32,
    -0.416429560_f32, -0.422000271_f32, -0.427555093_f32, -0.433093819_f32, -0.438616239_f32, -0.444122145_f32,
    -0.449611330_f32, -0.455083587_f32, -0.460538711_f32, -0.465976496_f32, -0.471396737_f32, -0.476799230_f32,
    -0.482183772_f32, -0.487550160_f32, -0.492898192_f32, -0.498227667_f32, -0.503538384_f32, -0.508830143_f32,
    -0.514102744_f32, -0.519355990_f32, -0.524589683_f32, -0.529803625_f32, -0.534997620_f32, -0.540171473_f32,
    -0.545324988_f32, -0.550457973_f32, -0.555570233_f32, -0.560661576_f32, -0.565731811_f32, -0.570780746_f32,
    -0.575808191_f32, -0.580813958_f32, -0.585797857_f32, -0.590759702_f32, -0.595699304_f32, -0.600616479_f32,
    -0.605511041_f32, -0.610382806_f32, -0.615231591_f32, -0.620057212_f32, -0.624859488_f32, -0.629638239_f32,
    -0.634393284_f32, -0.639124445_f32, -0.643831543_f32, -0.648514401_f32, -0.653172843_f32, -0.657806693_f32,
    -0.662415778_f32, -0.666999922_f32, -0.671558955_f32, -0.676092704_f32, -0.680600998_f32, -0.685083668_f32,
    -0.689540545_f32, -0.693971461_f32, -0.698376249_f32, -0.702754744_f32, -0.707106781_f32, -0.711432196_f32,
    -0.715730825_f32, -0.720002508_f32, -0.724247083_f32, -0.728464390_f32, -0.732654272_f32, -0.736816569_f32,
    -0.740951125_f32, -0.745057785_f32, -0.749136395_f32, -0.753186799_f32, -0.757208847_f32, -0.761202385_f32,
    -0.765167266_f32, -0.769103338_f32, -0.773010453_f32, -0.776888466_f32, -0.780737229_f32, -0.784556597_f32,
    -0.788346428_f32, -0.792106577_f32, -0.795836905_f32, -0.799537269_f32, -0.803207531_f32, -0.806847554_f32,
    -0.810457198_f32, -0.814036330_f32, -0.817584813_f32, -0.821102515_f32, -0.824589303_f32, -0.828045045_f32,
    -0.831469612_f32, -0.834862875_f32, -0.838224706_f32, -0.841554977_f32, -0.844853565_f32, -0.848120345_f32,
    -0.851355193_f32, -0.854557988_f32, -0.857728610_f32, -0.860866939_f32, -0.863972856_f32, -0.867046246_f32,
    -0.870086991_f32, -0.873094978_f32, -0.876070094_f32, -0.879012226_f32, -0.881921264_f32, -0.884797098_f32,
    -0.887639620_f32, -0.890448723_f32, -0.893224301_f32, -0.895966250_f32, -0.898674466_f32, -0.901348847_f32,
    -0.903989293_f32, -0.906595705_f32, -0.909167983_f32, -0.911706032_f32, -0.914209756_f32, -0.916679060_f32,
    -0.919113852_f32, -0.921514039_f32, -0.923879533_f32, -0.926210242_f32, -0.928506080_f32, -0.930766961_f32,
    -0.932992799_f32, -0.935183510_f32, -0.937339012_f32, -0.939459224_f32, -0.941544065_f32, -0.943593458_f32,
    -0.945607325_f32, -0.947585591_f32, -0.949528181_f32, -0.951435021_f32, -0.953306040_f32, -0.955141168_f32,
    -0.956940336_f32, -0.958703475_f32, -0.960430519_f32, -0.962121404_f32, -0.963776066_f32, -0.965394442_f32,
    -0.966976471_f32, -0.968522094_f32, -0.970031253_f32, -0.971503891_f32, -0.972939952_f32, -0.974339383_f32,
    -0.975702130_f32, -0.977028143_f32, -0.978317371_f32, -0.979569766_f32, -0.980785280_f32, -0.981963869_f32,
    -0.983105487_f32, -0.984210092_f32, -0.985277642_f32, -0.986308097_f32, -0.987301418_f32, -0.988257568_f32,
    -0.989176510_f32, -0.990058210_f32, -0.990902635_f32, -0.991709754_f32, -0.992479535_f32, -0.993211949_f32,
    -0.993906970_f32, -0.994564571_f32, -0.995184727_f32, -0.995767414_f32, -0.996312612_f32, -0.996820299_f32,
    -0.997290457_f32, -0.997723067_f32, -0.998118113_f32, -0.998475581_f32, -0.998795456_f32, -0.999077728_f32,
    -0.999322385_f32, -0.999529418_f32, -0.999698819_f32, -0.999830582_f32, -0.999924702_f32, -0.999981175_f32,
    -1.000000000_f32, -0.999981175_f32, -0.999924702_f32, -0.999830582_f32, -0.999698819_f32, -0.999529418_f32,
    -0.999322385_f32, -0.999077728_f32, -0.998795456_f32, -0.998475581_f32, -0.998118113_f32, -0.997723067_f32,
    -0.997290457_f32, -0.996820299_f32, -0.996312612_f32, -0.995767414_f32, -0.995184727_f32, -0.994564571_f32,
    -0.993906970_f32, -0.993211949_f32, -0.992479535_f32, -0.991709754_f32, -0.990902635_f32, -0.990058210_f32,
    -0.989176510_f32, -0.988257568_f32, -0.987301418_f32, -0.986308097_f32, -0.985277642_f32, -0.984210092_f32,
    -0.983105487_f32, -0.981963869_f32, -0.980785280_f32, -0.979569766_f32, -0.978317371_f32, -0.977028143_f32,
    -0.975702130_f32, -0.974339383_f32, -0.972939952_f32, -0.971503891_f32, -0.970031253_f32, -0.968522094_f32,
    -0.966976471_f32, -0.965394442_f32, -0.963776066_f32, -0.962121404_f32, -0.960430519_f32, -0.958703475_f32,
    -0.956940336_f32, -0.955141168_f32, -0.953306040_f32, -0.951435021_f32, -0.949528181_f32, -0.947585591_f32,
    -0.945607325_f32, -0.943593458_f32, -0.941544065_f32, -0.939459224_f32, -0.937339012_f32, -0.935183510_f32,
    -0.932992799_f32, -0.930766961_f32, -0.928506080_f32, -0.926210242_f32, -0.923879533_f32, -0.921514039_f32,
    -0.919113852_f32, -0.916679060_f32, -0.914209756_f32, -0.911706032_f32, -0.909167983_f32, -0.906595705_f32,
    -0.903989293_f32, -0.901348847_f32, -0.898674466_f32, -0.895966250_f32, -0.893224301_f32, -0.890448723_f32,
    -0.887639620_f32, -0.884797098_f32, -0.881921264_f32, -0.879012226_f32, -0.876070094_f32, -0.873094978_f32,
    -0.870086991_f32, -0.867046246_f32, -0.863972856_f32, -0.860866939_f32, -0.857728610_f32, -0.854557988_f32,
    -0.851355193_f32, -0.848120345_f32, -0.844853565_f32, -0.841554977_f32, -0.838224706_f32, -0.834862875_f32,
    -0.831469612_f32, -0.828045045_f32, -0.824589303_f32, -0.821102515_f32, -0.817584813_f32, -0.814036330_f32,
    -0.810457198_f32, -0.806847554_f32, -0.803207531_f32, -0.799537269_f32, -0.795836905_f32, -0.792106577_f32,
    -0.788346428_f32, -0.784556597_f32, -0.780737229_f32, -0.776888466_f32, -0.773010453_f32, -0.769103338_f32,
    -0.765167266_f32, -0.761202385_f32, -0.757208847_f32, -0.753186799_f32, -0.749136395_f32, -0.745057785_f32,
    -0.740951125_f32, -0.736816569_f32, -0.732654272_f32, -0.728464390_f32, -0.724247083_f32, -0.720002508_f32,
    -0.715730825_f32, -0.711432196_f32, -0.707106781_f32, -0.702754744_f32, -0.698376249_f32, -0.693971461_f32,
    -0.689540545_f32, -0.685083668_f32, -0.680600998_f32, -0.676092704_f32, -0.671558955_f32, -0.666999922_f32,
    -0.662415778_f32, -0.657806693_f32, -0.653172843_f32, -0.648514401_f32, -0.643831543_f32, -0.639124445_f32,
    -0.634393284_f32, -0.629638239_f32, -0.624859488_f32, -0.620057212_f32, -0.615231591_f32, -0.610382806_f32,
    -0.605511041_f32, -0.600616479_f32, -0.595699304_f32, -0.590759702_f32, -0.585797857_f32, -0.580813958_f32,
    -0.575808191_f32, -0.570780746_f32, -0.565731811_f32, -0.560661576_f32, -0.555570233_f32, -0.550457973_f32,
    -0.545324988_f32, -0.540171473_f32, -0.534997620_f32, -0.529803625_f32, -0.524589683_f32, -0.519355990_f32,
    -0.514102744_f32, -0.508830143_f32, -0.503538384_f32, -0.498227667_f32, -0.492898192_f32, -0.487550160_f32,
    -0.482183772_f32, -0.476799230_f32, -0.471396737_f32, -0.465976496_f32, -0.460538711_f32, -0.455083587_f32,
    -0.449611330_f32, -0.444122145_f32, -0.438616239_f32, -0.433093819_f32, -0.427555093_f32, -0.422000271_f32,
    -0.416429560_f32, -0.410843171_f32, -0.405241314_f32, -0.399624200_f32, -0.393992040_f32, -0.388345047_f32,
    -0.382683432_f32, -0.377007410_f32, -0.371317194_f32, -0.365612998_f32, -0.359895037_f32, -0.354163525_f32,
    -0.348418680_f32, -0.342660717_f32, -0.336889853_f32, -0.331106306_f32, -0.325310292_f32, -0.319502031_f32,
    -0.313681740_f32, -0.307849640_f32, -0.302005949_f32, -0.296150888_f32, -0.290284677_f32, -0.284407537_f32,
    -0.278519689_f32, -0.272621355_f32, -0.266712757_f32, -0.260794118_f32, -0.254865660_f32, -0.248927606_f32,
    -0.242980180_f32, -0.237023606_f32, -0.231058108_f32, -0.225083911_f32, -0.219101240_f32, -0.213110320_f32,
    -0.207111376_f32, -0.201104635_f32, -0.195090322_f32, -0.189068664_f32, -0.183039888_f32, -0.177004220_f32,
    -0.170961889_f32, -0.164913120_f32, -0.158858143_f32, -0.152797185_f32, -0.146730474_f32, -0.140658239_f32,
    -0.134580709_f32, -0.128498111_f32, -0.122410675_f32, -0.116318631_f32, -0.110222207_f32, -0.104121634_f32,
    -0.098017140_f32, -0.091908956_f32, -0.085797312_f32, -0.079682438_f32, -0.073564564_f32, -0.067443920_f32,
    -0.061320736_f32, -0.055195244_f32, -0.049067674_f32, -0.042938257_f32, -0.036807223_f32, -0.030674803_f32,
    -0.024541229_f32, -0.018406730_f32, -0.012271538_f32, -0.006135885_f32,
];
