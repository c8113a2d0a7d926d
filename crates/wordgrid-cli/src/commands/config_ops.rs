use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        wordgrid_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}

pub fn settings_export() {
    print!("{}", wordgrid_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        wordgrid_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.parallel={}, search.parallel_min_cells={}, input.uppercase={}",
        s.search.parallel, s.search.parallel_min_cells, s.input.uppercase
    );
}
