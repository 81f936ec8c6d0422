//! SVG Ramachandran scatter plots, one per residue class.
//!
//! The SVG backend writes text as SVG elements, so no system fonts are needed.

use crate::error::{CliError, Result};
use plotters::prelude::*;
use ramapp::core::models::angle::AngleRecord;
use ramapp::core::models::residue::ResidueClass;
use ramapp::engine::classify::ClassifiedAngles;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PLOT_SIZE: (u32, u32) = (800, 600);
const AXIS_LIMIT: f64 = 180.0;
const TICK_STEP: f64 = 45.0;
const POINT_RADIUS: i32 = 2;

fn ticks() -> Vec<f64> {
    let steps = (2.0 * AXIS_LIMIT / TICK_STEP) as usize;
    (0..=steps)
        .map(|i| -AXIS_LIMIT + i as f64 * TICK_STEP)
        .collect()
}

/// Writes `general.svg`, `glycine.svg` and `proline.svg` into `dir` and returns their paths.
///
/// Empty groups still get a plot with empty axes.
pub fn write_ramachandran_plots(classified: &ClassifiedAngles, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(ResidueClass::ALL.len());
    for (class, group) in classified.iter_groups() {
        let path = dir.join(format!("{}.svg", class.file_stem()));
        info!("Plotting {} {} record(s) to {:?}", group.len(), class.file_stem(), &path);
        draw_scatter(&path, class, group).map_err(|source| CliError::Plot {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

fn draw_scatter(path: &Path, class: ResidueClass, angles: &[AngleRecord]) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Ramachandran Plot (Scatter) - {}", class.label()),
            ("sans-serif", 20),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (-AXIS_LIMIT..AXIS_LIMIT).with_key_points(ticks()),
            (-AXIS_LIMIT..AXIS_LIMIT).with_key_points(ticks()),
        )?;

    chart
        .configure_mesh()
        .x_desc("Phi (degrees)")
        .y_desc("Psi (degrees)")
        .x_label_formatter(&|v: &f64| format!("{:.0}", v))
        .y_label_formatter(&|v: &f64| format!("{:.0}", v))
        .draw()?;

    chart.draw_series(angles.iter().map(|a| {
        Circle::new((a.phi, a.psi), POINT_RADIUS, BLUE.mix(0.6).filled())
    }))?;

    // Zero axes.
    chart.draw_series(DashedLineSeries::new(
        [(-AXIS_LIMIT, 0.0), (AXIS_LIMIT, 0.0)],
        10,
        6,
        BLACK.stroke_width(2),
    ))?;
    chart.draw_series(DashedLineSeries::new(
        [(0.0, -AXIS_LIMIT), (0.0, AXIS_LIMIT)],
        10,
        6,
        BLACK.stroke_width(2),
    ))?;

    root.present()?;
    debug!("Finished plot {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramapp::engine::classify::classify;
    use tempfile::tempdir;

    #[test]
    fn ticks_cover_the_full_circle_every_45_degrees() {
        assert_eq!(
            ticks(),
            vec![-180.0, -135.0, -90.0, -45.0, 0.0, 45.0, 90.0, 135.0, 180.0]
        );
    }

    #[test]
    fn writes_one_titled_svg_per_group_even_when_a_group_is_empty() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("plots");
        let classified = classify(vec![
            AngleRecord::new("ALA", -60.0, -45.0),
            AngleRecord::new("SER", -120.0, 130.0),
            AngleRecord::new("GLY", 80.0, 10.0),
        ]);

        let written = write_ramachandran_plots(&classified, &out_dir).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["general.svg", "glycine.svg", "proline.svg"]);
        for (path, class) in written.iter().zip(ResidueClass::ALL) {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("<svg"));
            assert!(svg.contains(class.label()));
        }
    }
}
