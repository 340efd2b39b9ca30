use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use orbit_math::{Quaternion, Vector3, host_info::HostInfo};

    #[derive(Debug, Parser)]
    #[command(about = "The Orbit math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Report the SIMD support, memory and graphics adapter of this machine
        HostInfo,
        /// Rotate a vector around an axis
        Rotate {
            /// Rotation axis as "x,y,z" (need not be normalized)
            #[arg(long, allow_hyphen_values = true)]
            axis: Vector3,

            /// Rotation angle in degrees
            #[arg(long, allow_hyphen_values = true)]
            angle: f32,

            /// Vector to rotate as "x,y,z"
            #[arg(long, allow_hyphen_values = true)]
            vector: Vector3,
        },
        /// Compute the shortest-arc rotation between two directions
        Between {
            /// Initial direction as "x,y,z"
            #[arg(long, allow_hyphen_values = true)]
            from: Vector3,

            /// Target direction as "x,y,z"
            #[arg(long, allow_hyphen_values = true)]
            to: Vector3,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::HostInfo => {
                let info = orbit_log::with_timing_info_logging!("Gathering host info"; {
                    HostInfo::gather()
                });
                println!("{info}");
            }
            Command::Rotate {
                axis,
                angle,
                vector,
            } => {
                if axis.is_zero() {
                    anyhow::bail!("The rotation axis must be nonzero");
                }
                let rotation = Quaternion::from_axis_angle(&axis, angle.to_radians());
                println!("{}", rotation * vector);
            }
            Command::Between { from, to } => {
                if from.is_zero() || to.is_zero() {
                    anyhow::bail!("Both directions must be nonzero");
                }
                let rotation = Quaternion::rotation_between(&from, &to);
                println!("Quaternion: {rotation}");
                match rotation.try_axis() {
                    Some(axis) => println!("Axis: {axis}"),
                    None => println!("Axis: none (directions are parallel)"),
                }
                println!(
                    "Angle: {} degrees (half-angle {} degrees)",
                    rotation.angle_quaternion().to_degrees(),
                    rotation.angle_euler().to_degrees()
                );
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
