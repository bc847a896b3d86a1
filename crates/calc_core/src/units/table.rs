//! Static unit tables, one slice per linear family plus temperature.
//!
//! `scale` is the size of one unit in the family base unit (metre,
//! kilogram, square metre, litre, second, metre per second, byte).
//! Temperature units map to Celsius as `°C = value × scale + offset`.

use super::{Unit, UnitFamily};

const fn unit(
    family: UnitFamily,
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    scale: f64,
) -> Unit {
    Unit {
        family,
        name,
        symbol,
        aliases,
        scale,
        offset: 0.0,
    }
}

/// Base: metre.
pub static LENGTH: &[Unit] = &[
    unit(UnitFamily::Length, "밀리미터", "mm", &["millimeter", "millimetre"], 0.001),
    unit(UnitFamily::Length, "센티미터", "cm", &["centimeter", "centimetre"], 0.01),
    unit(UnitFamily::Length, "미터", "m", &["meter", "metre"], 1.0),
    unit(UnitFamily::Length, "킬로미터", "km", &["kilometer", "kilometre"], 1_000.0),
    unit(UnitFamily::Length, "인치", "in", &["inch", "\""], 0.0254),
    unit(UnitFamily::Length, "피트", "ft", &["foot", "feet", "'"], 0.3048),
    unit(UnitFamily::Length, "야드", "yd", &["yard"], 0.9144),
    unit(UnitFamily::Length, "마일", "mi", &["mile"], 1_609.344),
    unit(UnitFamily::Length, "해리", "nmi", &["nautical-mile"], 1_852.0),
    unit(UnitFamily::Length, "자", "ja", &["척", "cheok"], 10.0 / 33.0),
];

/// Base: kilogram.
pub static WEIGHT: &[Unit] = &[
    unit(UnitFamily::Weight, "밀리그램", "mg", &["milligram"], 1e-6),
    unit(UnitFamily::Weight, "그램", "g", &["gram"], 0.001),
    unit(UnitFamily::Weight, "킬로그램", "kg", &["kilogram"], 1.0),
    unit(UnitFamily::Weight, "톤", "t", &["ton", "tonne"], 1_000.0),
    unit(UnitFamily::Weight, "온스", "oz", &["ounce"], 0.028_349_523_125),
    unit(UnitFamily::Weight, "파운드", "lb", &["pound", "lbs"], 0.453_592_37),
    unit(UnitFamily::Weight, "돈", "don", &[], 0.003_75),
    unit(UnitFamily::Weight, "근", "geun", &[], 0.6),
    unit(UnitFamily::Weight, "관", "gwan", &[], 3.75),
];

/// Base: square metre.
pub static AREA: &[Unit] = &[
    unit(UnitFamily::Area, "제곱센티미터", "cm2", &["㎠", "cm²"], 1e-4),
    unit(UnitFamily::Area, "제곱미터", "m2", &["㎡", "m²", "sqm"], 1.0),
    unit(UnitFamily::Area, "아르", "a", &["are"], 100.0),
    unit(UnitFamily::Area, "헥타르", "ha", &["hectare"], 10_000.0),
    unit(UnitFamily::Area, "제곱킬로미터", "km2", &["㎢", "km²"], 1e6),
    unit(UnitFamily::Area, "제곱피트", "ft2", &["ft²", "sqft"], 0.092_903_04),
    unit(UnitFamily::Area, "에이커", "ac", &["acre"], 4_046.856_422_4),
    unit(UnitFamily::Area, "평", "pyeong", &["py"], 400.0 / 121.0),
];

/// Base: litre.
pub static VOLUME: &[Unit] = &[
    unit(UnitFamily::Volume, "밀리리터", "mL", &["ml", "cc"], 0.001),
    unit(UnitFamily::Volume, "리터", "L", &["l", "liter", "litre"], 1.0),
    unit(UnitFamily::Volume, "세제곱미터", "m3", &["㎥", "m³"], 1_000.0),
    unit(UnitFamily::Volume, "컵", "cup", &[], 0.236_588_236_5),
    unit(UnitFamily::Volume, "액량온스", "floz", &["fl oz"], 0.029_573_529_562_5),
    unit(UnitFamily::Volume, "쿼트", "qt", &["quart"], 0.946_352_946),
    unit(UnitFamily::Volume, "갤런", "gal", &["gallon"], 3.785_411_784),
    unit(UnitFamily::Volume, "되", "doe", &[], 1.803_9),
    unit(UnitFamily::Volume, "말", "mal", &[], 18.039),
];

/// Base: second.
pub static TIME: &[Unit] = &[
    unit(UnitFamily::Time, "밀리초", "ms", &["millisecond"], 0.001),
    unit(UnitFamily::Time, "초", "s", &["sec", "second"], 1.0),
    unit(UnitFamily::Time, "분", "min", &["minute"], 60.0),
    unit(UnitFamily::Time, "시간", "h", &["hr", "hour"], 3_600.0),
    unit(UnitFamily::Time, "일", "day", &["d"], 86_400.0),
    unit(UnitFamily::Time, "주", "week", &["wk"], 604_800.0),
    unit(UnitFamily::Time, "월", "month", &["mo"], 2_629_746.0),
    unit(UnitFamily::Time, "년", "year", &["yr", "y"], 31_556_952.0),
];

/// Base: metre per second.
pub static SPEED: &[Unit] = &[
    unit(UnitFamily::Speed, "미터/초", "m/s", &["mps"], 1.0),
    unit(UnitFamily::Speed, "킬로미터/시", "km/h", &["kph", "kmh"], 1.0 / 3.6),
    unit(UnitFamily::Speed, "마일/시", "mph", &[], 0.447_04),
    unit(UnitFamily::Speed, "피트/초", "ft/s", &["fps"], 0.3048),
    unit(UnitFamily::Speed, "노트", "kn", &["knot", "kt"], 1_852.0 / 3_600.0),
];

/// Base: byte. Multiples are binary (1 KB = 1024 B).
pub static DATA_SIZE: &[Unit] = &[
    unit(UnitFamily::DataSize, "비트", "bit", &["bits", "b"], 0.125),
    unit(UnitFamily::DataSize, "바이트", "B", &["byte", "bytes"], 1.0),
    unit(UnitFamily::DataSize, "킬로바이트", "KB", &["KiB"], 1_024.0),
    unit(UnitFamily::DataSize, "메가바이트", "MB", &["MiB"], 1_048_576.0),
    unit(UnitFamily::DataSize, "기가바이트", "GB", &["GiB"], 1_073_741_824.0),
    unit(UnitFamily::DataSize, "테라바이트", "TB", &["TiB"], 1_099_511_627_776.0),
];

/// °C = value × scale + offset.
pub static TEMPERATURE: &[Unit] = &[
    Unit {
        family: UnitFamily::Temperature,
        name: "섭씨",
        symbol: "°C",
        aliases: &["C", "celsius", "degC"],
        scale: 1.0,
        offset: 0.0,
    },
    Unit {
        family: UnitFamily::Temperature,
        name: "화씨",
        symbol: "°F",
        aliases: &["F", "fahrenheit", "degF"],
        scale: 5.0 / 9.0,
        offset: -160.0 / 9.0,
    },
    Unit {
        family: UnitFamily::Temperature,
        name: "켈빈",
        symbol: "K",
        aliases: &["kelvin"],
        scale: 1.0,
        offset: -273.15,
    },
];
