//! Vector Information Tool
//!
//! Builds a vector from Cartesian, spherical, pt/theta/phi or cylindrical
//! input and prints its components, magnitudes and angles.
//!
//! Usage:
//!   cargo run --bin vector_info -- 0 3 4
//!   cargo run --bin vector_info -- --from spherical --degrees 1 90 90
//!   cargo run --bin vector_info -- --json -- -1 2 -3

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tools::math::{DEG_TO_RAD, RAD_TO_DEG};
use tools::Vector3;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// How the three input values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputKind {
    /// x y z
    Cartesian,
    /// mag theta phi
    Spherical,
    /// pt theta phi
    Pt,
    /// rho phi z
    Cylindrical,
}

/// Vector Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Displays components, magnitudes and angles of a 3D vector",
    long_about = None
)]
struct Args {
    /// Coordinate system of the input values
    #[arg(short, long, value_enum, default_value_t = InputKind::Cartesian)]
    from: InputKind,

    /// Read and print angles in degrees instead of radians
    #[arg(short, long, action = ArgAction::SetTrue)]
    degrees: bool,

    /// Print the report as JSON
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// The three input values
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

/// Everything printed about a vector
#[derive(Debug, Serialize)]
struct VectorReport {
    vector: Vector3,
    mag: f64,
    mag2: f64,
    perp: f64,
    theta: f64,
    phi: f64,
}

impl VectorReport {
    fn new(vector: Vector3, angle_scale: f64) -> Self {
        Self {
            vector,
            mag: vector.mag(),
            mag2: vector.mag2(),
            perp: vector.perp(),
            theta: vector.theta() * angle_scale,
            phi: vector.phi() * angle_scale,
        }
    }
}

/// Builds the vector described by the command line
fn build_vector(kind: InputKind, values: &[f64], degrees: bool) -> Result<Vector3> {
    let &[a, b, c] = values else {
        return Err(format!("expected 3 values, got {}", values.len()).into());
    };
    let to_rad = if degrees { DEG_TO_RAD } else { 1.0 };

    let mut v = Vector3::default();
    match kind {
        InputKind::Cartesian => v.set_xyz(a, b, c),
        InputKind::Spherical => v.set_mag_theta_phi(a, b * to_rad, c * to_rad),
        InputKind::Pt => v.set_pt_theta_phi(a, b * to_rad, c * to_rad),
        InputKind::Cylindrical => v.set_rho_phi_z(a, b * to_rad, c),
    }
    Ok(v)
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:>10}: {}", name, value);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let vector = build_vector(args.from, &args.values, args.degrees)?;
    let angle_scale = if args.degrees { RAD_TO_DEG } else { 1.0 };
    let report = VectorReport::new(vector, angle_scale);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let unit = if args.degrees { "deg" } else { "rad" };
    println!("Vector: {}", report.vector);
    println!("-------------------------------------------------------");
    print_named_value("x", report.vector.x());
    print_named_value("y", report.vector.y());
    print_named_value("z", report.vector.z());
    print_named_value("mag", report.mag);
    print_named_value("mag2", report.mag2);
    print_named_value("perp", report.perp);
    print_named_value("theta", format!("{} {}", report.theta, unit));
    print_named_value("phi", format!("{} {}", report.phi, unit));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_build_cartesian() {
        let v = build_vector(InputKind::Cartesian, &[0.0, 3.0, 4.0], false).unwrap();
        assert_eq!(v, Vector3::new(0.0, 3.0, 4.0));
    }

    #[test]
    fn test_build_spherical_degrees() {
        let v = build_vector(InputKind::Spherical, &[1.0, 90.0, 90.0], true).unwrap();
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_build_cylindrical_keeps_z() {
        let v = build_vector(InputKind::Cylindrical, &[2.0, 0.0, -5.0], true).unwrap();
        assert_eq!(v, Vector3::new(2.0, 0.0, -5.0));
    }

    #[test]
    fn test_build_rejects_wrong_count() {
        assert!(build_vector(InputKind::Pt, &[1.0, 2.0], false).is_err());
    }

    #[test]
    fn test_report_angles_in_degrees() {
        let report = VectorReport::new(Vector3::new(0.0, 1.0, 0.0), RAD_TO_DEG);
        assert_abs_diff_eq!(report.theta, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.phi, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_args_parse_negative_values() {
        let args =
            Args::try_parse_from(["vector_info", "--from", "pt", "1", "-0.5", "2"]).unwrap();
        assert_eq!(args.from, InputKind::Pt);
        assert_eq!(args.values, vec![1.0, -0.5, 2.0]);
    }
}
