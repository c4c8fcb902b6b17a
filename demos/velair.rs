// SPDX-License-Identifier: MPL-2.0

//! Command-line control of a Velair unit.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example velair -- <host> status
//! cargo run --example velair -- <host> night <on|off>
//! cargo run --example velair -- <host> fan <auto|low|medium|high|maximum>
//! cargo run --example velair -- <host> mode <heating|cooling|dehumidification|fanonly|auto>
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Print the current status
//! cargo run --example velair -- 192.168.1.40 status
//!
//! # Switch to cooling at low fan speed
//! cargo run --example velair -- 192.168.1.40 mode cooling
//! cargo run --example velair -- 192.168.1.40 fan low
//! ```

use std::env;

use velair_lib::{Device, DeviceMode, FanSpeed, HttpConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("velair", String::as_str);

    if args.len() < 3 {
        print_usage(program);
        std::process::exit(1);
    }

    let device = Device::http(HttpConfig::new(&args[1]))?;

    match (args[2].as_str(), args.get(3).map(String::as_str)) {
        ("status", None) => {
            let status = device.get_status().await?;
            println!("Name:        {}", status.name);
            println!("Power:       {}", if status.power { "on" } else { "off" });
            println!("Mode:        {}", status.mode);
            println!("Fan speed:   {}", status.fan_speed);
            println!("Night mode:  {}", if status.night_mode { "on" } else { "off" });
            println!("Set point:   {}°C", status.set_point);
            println!("Temperature: {}°C", status.temperature);
        }
        ("night", Some(state @ ("on" | "off"))) => {
            device.set_night_mode(state == "on").await?;
            println!("Night mode {state}");
        }
        ("fan", Some(name)) => {
            let speed: FanSpeed = name.parse()?;
            device.set_fan_speed(speed).await?;
            println!("Fan speed set to {speed}");
        }
        ("mode", Some(name)) => {
            let mode: DeviceMode = name.parse()?;
            device.set_mode(mode).await?;
            println!("Mode set to {mode}");
        }
        _ => {
            print_usage(program);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} <host> status");
    eprintln!("  {program} <host> night <on|off>");
    eprintln!("  {program} <host> fan <auto|low|medium|high|maximum>");
    eprintln!("  {program} <host> mode <heating|cooling|dehumidification|fanonly|auto>");
}
