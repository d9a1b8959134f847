#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::{collections::HashSet, error::Error};

use log::info;
use plotters::prelude::*;
use rand::Rng;
use simplehashmap::{MapConfig, MapError, SimpleHashMap};

// Fixed table size; the map is built with load factor 1.0 so it never grows here
const TABLE_SIZE: isize = 1 << 16;
// Fill ratios from 0.1 to 0.95 in 10 steps
const NUM_FILL_RATIOS: usize = 10;

const FONT_FAMILY: &str = "sans-serif";
const COLORS: [RGBColor; 2] = [
    RGBColor(220, 50, 50), // Bright red
    RGBColor(50, 90, 220), // Bright blue
];

#[derive(Debug, Clone, Copy)]
struct Sample {
    fill_ratio: f64,
    average_probes: f64,
    worst_probes: usize,
}

// Knuth's estimate for a successful search under linear probing
fn expected_probes(fill_ratio: f64) -> f64 {
    0.5 * (1.0 + 1.0 / (1.0 - fill_ratio))
}

fn measure(keys: &[i32]) -> Result<Sample, MapError> {
    let mut map = SimpleHashMap::with_config(MapConfig::new(TABLE_SIZE, 1.0))?;
    for &key in keys {
        map.put(key, i64::from(key))?;
    }

    let mut total = 0;
    let mut worst = 0;
    for &key in keys {
        // A key in its home slot costs one probe
        let probes = map.probe_distance(key)?.map_or(0, |distance| distance + 1);
        total += probes;
        worst = worst.max(probes);
    }

    Ok(Sample {
        fill_ratio: map.fill_ratio(),
        average_probes: total as f64 / keys.len().max(1) as f64,
        worst_probes: worst,
    })
}

fn distinct_random_keys(count: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);

    while keys.len() < count {
        let key: i32 = rng.random();
        if seen.insert(key) {
            keys.push(key);
        }
    }

    keys
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[(&str, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(0.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Fill ratio")
        .y_desc(y_desc)
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    for (idx, (label, points)) in series.iter().enumerate() {
        let color = COLORS[idx % COLORS.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    info!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let fill_ratios: Vec<f64> = (0..NUM_FILL_RATIOS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_FILL_RATIOS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        fill_ratios.iter().map(|&ratio| (TABLE_SIZE as f64 * ratio) as usize).collect();

    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);
    let keys = distinct_random_keys(max_keys_needed);
    info!("generated {max_keys_needed} distinct keys for {TABLE_SIZE} slots");

    let mut samples = Vec::with_capacity(num_keys.len());
    for &n_keys in &num_keys {
        let sample = measure(&keys[..n_keys])?;
        println!(
            "{n_keys:>6} keys (fill {:.2}): avg probes = {:.2} (expected {:.2}), worst = {}",
            sample.fill_ratio,
            sample.average_probes,
            expected_probes(sample.fill_ratio),
            sample.worst_probes
        );
        samples.push(sample);
    }

    let measured: Vec<(f64, f64)> =
        samples.iter().map(|s| (s.fill_ratio, s.average_probes)).collect();
    let expected: Vec<(f64, f64)> =
        samples.iter().map(|s| (s.fill_ratio, expected_probes(s.fill_ratio))).collect();
    draw_chart(
        "average_probe_distance.png",
        "Linear Probing: Average Probes per Lookup",
        "Average probes",
        &[("Measured", measured), ("Expected (Knuth)", expected)],
    )?;

    let worst: Vec<(f64, f64)> =
        samples.iter().map(|s| (s.fill_ratio, s.worst_probes as f64)).collect();
    draw_chart(
        "worst_probe_distance.png",
        "Linear Probing: Worst-Case Probes per Lookup",
        "Worst-case probes",
        &[("Measured", worst)],
    )?;

    Ok(())
}
