use std::process::ExitCode;

use monet::export::{BootColors, Overlay};
use monet::scheme::{SchemeGenerator, STOPS};
use monet::{Env, Rgb, Tunables};

/// Print a swatch line with one true-color block per stop.
fn print_swatch<I: Iterator<Item = Rgb>>(name: &str, colors: I) {
    let mut line = format!("{:>9} ", name);
    for color in colors {
        let [r, g, b] = *color.as_ref();
        line.push_str(&format!("\x1b[48;2;{};{};{}m    \x1b[m", r, g, b));
    }
    println!("{}", line);
}

fn main() -> ExitCode {
    // Tunables come from MONET_ENGINE_* environment variables.
    let tunables = Tunables::from_settings(&Env::default());

    let wallpaper = match std::env::args().nth(1).as_deref().map(str::parse::<Rgb>) {
        None => Rgb::new(0x42, 0x85, 0xf4),
        Some(Ok(color)) => color,
        Some(Err(error)) => {
            eprintln!("usage: palette [#rrggbb]: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let seed = tunables.seed(wallpaper);
    let scheme = SchemeGenerator::new(&tunables).generate(seed);

    println!("seed {} with {:?}\n", seed, tunables);
    let header: String = STOPS.iter().map(|stop| format!("{:>4}", stop)).collect();
    println!("{:>9} {}", "", header);
    for (group, swatch) in scheme.iter() {
        print_swatch(group.name(), swatch.iter().map(|(_, color)| color));
    }

    let boot: Vec<String> = BootColors::from_scheme(&scheme)
        .colors()
        .iter()
        .map(Rgb::to_string)
        .collect();
    println!("\nboot colors {}", boot.join(" "));
    println!("overlay entries {}", Overlay::from_scheme(&scheme).len());

    ExitCode::SUCCESS
}
