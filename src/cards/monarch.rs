//! Static card tables for the Monarch expansion.
//!
//! Pools are ordered as printed. Some equipment ids also appear in the
//! commons pool; the generator treats pool membership as-is and does not
//! deduplicate across pools.

pub const FABLED: &[&str] = &[
    "MON000",
];

pub const TOKENS: &[&str] = &[
    "MON001", "MON002", "MON029", "MON030", "MON088", "MON104", "MON105", "MON106",
    "MON119", "MON120", "MON153", "MON154", "MON155", "MON186", "MON219", "MON220",
    "MON221", "MON306",
];

pub const LEGENDARIES: &[&str] = &[
    "MON060", "MON089", "MON107", "MON187", "MON189", "MON190",
];

pub const MAJESTIC_WEAPONS: &[&str] = &[
    "MON003", "MON031", "MON121", "MON155", "MON229",
];

pub const MAJESTICS: &[&str] = &[
    "MON004", "MON005", "MON006", "MON032", "MON033", "MON034", "MON062", "MON063",
    "MON064", "MON065", "MON091", "MON109", "MON123", "MON124", "MON125", "MON156",
    "MON157", "MON158", "MON191", "MON192", "MON193", "MON194", "MON222", "MON231",
    "MON245", "MON246", "MON247",
];

pub const RARES: &[&str] = &[
    "MON007", "MON008", "MON009", "MON010", "MON011", "MON012", "MON013", "MON035",
    "MON036", "MON037", "MON038", "MON039", "MON040", "MON041", "MON066", "MON067",
    "MON068", "MON069", "MON070", "MON071", "MON092", "MON093", "MON094", "MON095",
    "MON096", "MON097", "MON110", "MON111", "MON112", "MON113", "MON114", "MON115",
    "MON126", "MON127", "MON128", "MON129", "MON130", "MON131", "MON132", "MON133",
    "MON134", "MON159", "MON160", "MON161", "MON162", "MON163", "MON164", "MON165",
    "MON166", "MON167", "MON195", "MON196", "MON197", "MON198", "MON199", "MON200",
    "MON201", "MON202", "MON223", "MON224", "MON225", "MON232", "MON233", "MON234",
    "MON248", "MON249", "MON250", "MON251", "MON252", "MON253", "MON254", "MON255",
    "MON256", "MON257", "MON258", "MON259", "MON260", "MON261", "MON262",
];

pub const COMMON_EQUIPMENT: &[&str] = &[
    "MON061", "MON090", "MON108", "MON122", "MON188", "MON230", "MON238", "MON239",
    "MON240", "MON241", "MON242", "MON243", "MON244",
];

pub const COMMONS: &[&str] = &[
    "MON014", "MON015", "MON016", "MON017", "MON018", "MON019", "MON020", "MON021",
    "MON022", "MON023", "MON024", "MON025", "MON026", "MON027", "MON028", "MON042",
    "MON043", "MON044", "MON045", "MON046", "MON047", "MON048", "MON049", "MON050",
    "MON051", "MON052", "MON053", "MON054", "MON055", "MON056", "MON057", "MON058",
    "MON059", "MON061", "MON072", "MON073", "MON074", "MON075", "MON076", "MON077",
    "MON078", "MON079", "MON080", "MON081", "MON082", "MON083", "MON084", "MON085",
    "MON086", "MON087", "MON090", "MON098", "MON099", "MON100", "MON101", "MON102",
    "MON103", "MON108", "MON116", "MON117", "MON118", "MON122", "MON135", "MON136",
    "MON137", "MON138", "MON139", "MON140", "MON141", "MON142", "MON143", "MON144",
    "MON145", "MON146", "MON147", "MON148", "MON149", "MON150", "MON151", "MON152",
    "MON168", "MON169", "MON170", "MON171", "MON172", "MON173", "MON174", "MON175",
    "MON176", "MON177", "MON178", "MON179", "MON180", "MON181", "MON182", "MON183",
    "MON184", "MON185", "MON188", "MON203", "MON204", "MON205", "MON206", "MON207",
    "MON208", "MON209", "MON210", "MON211", "MON212", "MON213", "MON214", "MON215",
    "MON216", "MON217", "MON218", "MON226", "MON227", "MON228", "MON230", "MON235",
    "MON236", "MON237", "MON238", "MON239", "MON240", "MON241", "MON242", "MON243",
    "MON244", "MON263", "MON264", "MON265", "MON266", "MON267", "MON268", "MON269",
    "MON270", "MON271", "MON272", "MON273", "MON274", "MON275", "MON276", "MON277",
    "MON278", "MON279", "MON280", "MON281", "MON282", "MON283", "MON284", "MON285",
    "MON286", "MON287", "MON288", "MON289", "MON290", "MON291", "MON292", "MON293",
    "MON294", "MON295", "MON296", "MON297", "MON298", "MON299", "MON300", "MON301",
    "MON302", "MON303", "MON304", "MON305",
];

/// Drawing this token suppresses the second token draw.
pub const SINGLE_TOKEN: &str = "MON306";
