//! Line intersections and plane comparisons.
//!
//! Run with `cargo run --example lines_and_planes`.

use linsys::prelude::*;

fn main() -> Result<(), SolverError> {
    let line_pairs = [
        (["4.046", "2.836"], "1.21", ["10.115", "7.09"], "3.025"),
        (["7.204", "3.182"], "8.68", ["8.172", "4.114"], "9.883"),
        (["1.182", "5.562"], "6.744", ["1.773", "8.343"], "9.525"),
    ];

    println!("== Lines ==");
    for (n1, k1, n2, k2) in &line_pairs {
        let a: Hyperplane = Hyperplane::parse(n1, k1)?;
        let b = Hyperplane::parse(n2, k2)?;
        let outcome = match a.intersection_with(&b)? {
            LineIntersection::Point(point) => {
                let rounded: Coordinates = point.iter().map(|x| x.round_dp(3)).collect();
                format!("meet at {rounded}")
            }
            LineIntersection::Coincident => "are the same line".to_string(),
            LineIntersection::Disjoint => "are parallel".to_string(),
        };
        println!("{a}  and  {b}  {outcome}");
    }

    let plane_pairs = [
        (["-0.412", "3.806", "0.728"], "-3.46", ["1.03", "-9.515", "-1.82"], "8.65"),
        (["2.611", "5.528", "0.283"], "4.6", ["7.715", "8.306", "5.342"], "3.76"),
        (["-7.926", "8.625", "-7.212"], "-7.952", ["-2.642", "2.875", "-2.404"], "2.443"),
    ];

    println!("\n== Planes ==");
    for (n1, k1, n2, k2) in &plane_pairs {
        let a: Hyperplane = Hyperplane::parse(n1, k1)?;
        let b = Hyperplane::parse(n2, k2)?;
        println!(
            "{a}  vs  {b}: parallel = {}, same plane = {}",
            a.is_parallel_to(&b),
            a.approx_eq(&b)
        );
    }

    let u = Coordinates::<Decimal>::parse(&["3.039", "1.879"])?;
    let v = Coordinates::parse(&["0.825", "2.036"])?;
    println!("\n== Vectors ==");
    println!("projection of {u} onto {v}: {}", u.projection_onto(&v)?);
    println!(
        "angle between them: {:.3} degrees",
        u.angle_with(&v, AngleUnit::Degrees)?
    );

    Ok(())
}
