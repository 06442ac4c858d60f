//! Fixed building and run constants.

/// Version label used to name output files and directories.
pub const VSTR: &str = "ALPS2023";

/// Version of the country data and floor surface inputs.
pub const VSTRCNTRY: &str = "v4";

/// Balance temperatures for simple cooling degree days [°C].
pub const BAL_TEMPS: [f64; 3] = [18.3, 21.1, 26.0];

pub const ARB_FAN: i32 = 2;

/// Indoor setpoint temperature for heating [°C].
pub const T_SP_H: i8 = 20;

/// Fan power [W].
pub const P_F: i32 = 55;

/// Floor area served by one fan [m²].
pub const AREA_FAN: i32 = 25;

/// Global grid shape (lat, lon) at 0.5° resolution.
pub const GRIDSHAPE2: (usize, usize) = (360, 720);

/// Day-count threshold.
pub const ND_THRESH: i32 = 5;
