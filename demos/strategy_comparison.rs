//! Runs the four strategies on the canonical ten-arm testbed and prints a
//! comparison table. The plotting of these curves lives outside this crate;
//! this demo tabulates the same statistics.

use banditlab::{Experiment, ExperimentConfig};

fn main() {
    let config = ExperimentConfig::default();
    println!("banditlab: strategy comparison");
    println!("{}", "=".repeat(60));
    println!(
        "{} arms, {} steps, {} runs, epsilon={}, temperature={}, c={}",
        config.fixed_rewards.len(),
        config.n_steps,
        config.n_runs,
        config.epsilon,
        config.temperature,
        config.c
    );

    println!("\nTrue arm rewards:");
    for (arm, reward) in config.fixed_rewards.iter().enumerate() {
        println!("  arm {arm}: {reward:+.1}");
    }

    let n_steps = config.n_steps;
    let experiment = Experiment::new(config).expect("valid config");
    let results = experiment
        .compare(&["epsilon_greedy", "ucb", "softmax", "thompson"])
        .expect("known strategies");

    for (name, result) in &results {
        println!("\n{name}");
        println!("{}", "-".repeat(name.len()));
        println!(
            "  final mean cumulative reward: {:.1}",
            result.cumulative_rewards[n_steps - 1]
        );

        let mean_explore =
            result.exploration_rate.iter().sum::<f64>() / result.exploration_rate.len() as f64;
        println!("  mean exploration rate:        {mean_explore:.3}");

        let total: u64 = result.arm_counts.iter().sum();
        println!("  arm selection shares:");
        for (arm, &count) in result.arm_counts.iter().enumerate() {
            let share = count as f64 / total as f64 * 100.0;
            println!("    arm {arm}: {count:>7} ({share:>5.1}%)");
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("All four strategies should concentrate on arm 0 (true reward +1.0).");
}
