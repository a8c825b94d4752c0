//! Solves a handful of plane systems and prints each step.
//!
//! Run with `cargo run --example solve_systems`.

use linsys::prelude::*;

fn system(rows: &[([&str; 3], &str)]) -> Result<LinearSystem, SolverError> {
    let rows = rows
        .iter()
        .map(|(normal, constant)| Hyperplane::parse(normal, constant))
        .collect::<Result<Vec<_>, _>>()?;
    LinearSystem::new(rows)
}

fn main() -> Result<(), SolverError> {
    let systems = [
        (
            "Parallel planes",
            system(&[
                (["5.862", "1.178", "-10.366"], "-8.15"),
                (["-2.931", "-0.589", "5.183"], "-4.075"),
            ])?,
        ),
        (
            "Three planes through a line",
            system(&[
                (["8.631", "5.112", "-1.816"], "-5.113"),
                (["4.315", "11.132", "-5.27"], "-6.775"),
                (["-2.158", "3.01", "-1.727"], "-0.831"),
            ])?,
        ),
        (
            "Four planes through a point",
            system(&[
                (["5.262", "2.739", "-9.878"], "-3.441"),
                (["5.111", "6.358", "7.638"], "-2.152"),
                (["2.016", "-9.924", "-1.367"], "-9.278"),
                (["2.167", "-13.543", "-18.883"], "-10.567"),
            ])?,
        ),
        (
            "Four copies of one plane",
            system(&[
                (["0.935", "1.76", "-9.365"], "-9.955"),
                (["0.187", "0.352", "-1.873"], "-1.991"),
                (["0.374", "0.704", "-3.746"], "-3.982"),
                (["-0.561", "-1.056", "5.619"], "5.973"),
            ])?,
        ),
    ];

    for (title, system) in &systems {
        println!("== {title} ==");
        println!("{system}");
        println!("RREF:\n{}", system.rref());
        println!("{}\n", system.compute_solution());
    }

    Ok(())
}
