use engine::RunReport;

const BINS: usize = 10;

pub fn print_summary(report: &RunReport) {
    println!("skirmish results");
    println!("----------------");
    println!("trials:        {}", report.trials);
    println!("wins:          {}", report.wins);
    println!("losses:        {}", report.losses);
    println!("inconclusive:  {}", report.inconclusive);
    println!(
        "win rate:      {:.1}% ± {:.1}%",
        report.win_rate * 100.0,
        report.half_width * 100.0
    );
}

pub fn print_histograms(report: &RunReport) {
    for player in &report.samples {
        println!();
        println!("final HP of {} (id {})", player.name, player.id);
        for (lo, hi, pct) in histogram(&player.final_hp, BINS) {
            // one '#' per two percent keeps the bar inside a terminal
            let bar = "#".repeat((pct / 2.0).round() as usize);
            println!("{:>4}..{:<4} {:>5.1}% {}", lo, hi, pct, bar);
        }
    }
}

/// Equal-width bins over [min, max]; each entry is (lo, hi, percentage).
/// The last bin absorbs the maximum sample.
fn histogram(samples: &[i32], bins: usize) -> Vec<(i32, i32, f64)> {
    if bins == 0 {
        return Vec::new();
    }
    let Some(&min) = samples.iter().min() else {
        return Vec::new();
    };
    let Some(&max) = samples.iter().max() else {
        return Vec::new();
    };
    let width = (f64::from(max - min) / bins as f64).ceil().max(1.0) as i32;
    let mut counts = vec![0u32; bins];
    for &sample in samples {
        let idx = (((sample - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lo = min + width * i as i32;
            (lo, lo + width, f64::from(count) * 100.0 / samples.len() as f64)
        })
        .collect()
}
