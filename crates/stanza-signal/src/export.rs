//! Export formats for computation results.
//!
//! Provides interoperability with spreadsheet tooling:
//! - semicolon-delimited CSV reports (settings block + result table)
//! - sampled response curves as CSV for external plotting
//!
//! The semicolon delimiter matches spreadsheet locales that use the comma
//! as a decimal separator.

use crate::response::ResponseCurves;
use stanza_core::{AcousticParameters, ModeCollection, RoomGeometry, StandingWaveRecord};
use std::io::Write;
use std::path::Path;

/// Write the shared room-settings block at the top of a report.
fn write_settings_block(
    file: &mut std::fs::File,
    geometry: &RoomGeometry,
    params: &AcousticParameters,
) -> std::io::Result<()> {
    writeln!(file, "Room Settings")?;
    writeln!(file, "Length (m);{}", geometry.length)?;
    writeln!(file, "Width (m);{}", geometry.width)?;
    writeln!(file, "Height (m);{}", geometry.height)?;
    writeln!(file, "Sound Speed (m/s);{}", params.sound_speed)?;
    writeln!(file, "Max Modes;{}", params.max_mode_index)?;
    Ok(())
}

/// Export the full mode listing as a semicolon-delimited CSV report.
///
/// Layout: a title line, the room-settings block, then a
/// `Type;Mode;Frequency (Hz)` table with all axial modes first, then
/// tangential, then oblique (each internally frequency-sorted, as in the
/// collection itself).
///
/// # Example
///
/// ```rust,ignore
/// use stanza_signal::export_report_csv;
///
/// let modes = enumerate_modes(&room, &params);
/// export_report_csv(&modes, &room, &params, "report.csv")?;
/// ```
pub fn export_report_csv(
    modes: &ModeCollection,
    geometry: &RoomGeometry,
    params: &AcousticParameters,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "Room Acoustics Analysis")?;
    writeln!(file)?;
    write_settings_block(&mut file, geometry, params)?;
    writeln!(file)?;

    writeln!(file, "Resonance Frequencies")?;
    writeln!(file, "Type;Mode;Frequency (Hz)")?;
    for record in modes.iter() {
        writeln!(
            file,
            "{};{};{:.2}",
            record.mode_type.label(),
            record.label(),
            record.frequency
        )?;
    }

    Ok(())
}

/// Export the standing-wave series as a semicolon-delimited CSV report.
///
/// Same settings block as [`export_report_csv`], followed by a
/// `Dimension;Mode;Frequency (Hz)` table in the list's (frequency-sorted)
/// order.
pub fn export_standing_waves_csv(
    waves: &[StandingWaveRecord],
    geometry: &RoomGeometry,
    params: &AcousticParameters,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "Room Acoustics Analysis")?;
    writeln!(file)?;
    write_settings_block(&mut file, geometry, params)?;
    writeln!(file)?;

    writeln!(file, "Standing Waves")?;
    writeln!(file, "Dimension;Mode;Frequency (Hz)")?;
    for record in waves {
        writeln!(
            file,
            "{};{};{:.2}",
            record.dimension.label(),
            record.mode_index,
            record.frequency
        )?;
    }

    Ok(())
}

/// Export the four sampled response curves as CSV for external plotting.
///
/// One row per sample: `frequency_hz;axial;tangential;oblique;combined`.
pub fn export_response_csv(
    curves: &ResponseCurves,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "frequency_hz;axial;tangential;oblique;combined")?;
    for i in 0..curves.resolution() {
        writeln!(
            file,
            "{:.3};{:.6};{:.6};{:.6};{:.6}",
            curves.frequency_at(i),
            curves.axial[i],
            curves.tangential[i],
            curves.oblique[i],
            curves.combined[i]
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanza_core::enumerate_modes;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn read_back(path: &Path) -> String {
        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn report_contains_settings_and_sorted_modes() {
        let room = RoomGeometry::new(4.0, 3.0, 2.5);
        let params = AcousticParameters::new(343.0, 2);
        let modes = enumerate_modes(&room, &params);

        let temp_file = NamedTempFile::new().unwrap();
        export_report_csv(&modes, &room, &params, temp_file.path()).unwrap();
        let content = read_back(temp_file.path());

        assert!(content.contains("Length (m);4"));
        assert!(content.contains("Width (m);3"));
        assert!(content.contains("Height (m);2.5"));
        assert!(content.contains("Sound Speed (m/s);343"));
        assert!(content.contains("Max Modes;2"));
        assert!(content.contains("Type;Mode;Frequency (Hz)"));
        assert!(content.contains("Axial;(1,0,0);42.88"));

        // Axial block precedes tangential, which precedes oblique.
        let axial_pos = content.find("Axial;").unwrap();
        let tangential_pos = content.find("Tangential;").unwrap();
        let oblique_pos = content.find("Oblique;").unwrap();
        assert!(axial_pos < tangential_pos && tangential_pos < oblique_pos);
    }

    #[test]
    fn report_row_count_matches_collection() {
        let room = RoomGeometry::new(4.0, 3.0, 2.5);
        let params = AcousticParameters::new(343.0, 3);
        let modes = enumerate_modes(&room, &params);

        let temp_file = NamedTempFile::new().unwrap();
        export_report_csv(&modes, &room, &params, temp_file.path()).unwrap();
        let content = read_back(temp_file.path());

        let data_rows = content
            .lines()
            .filter(|l| {
                l.starts_with("Axial;") || l.starts_with("Tangential;") || l.starts_with("Oblique;")
            })
            .count();
        assert_eq!(data_rows, modes.total());
    }

    #[test]
    fn standing_waves_csv_lists_all_records() {
        let room = RoomGeometry::new(4.0, 3.0, 2.5);
        let params = AcousticParameters::new(343.0, 2);
        let waves = stanza_core::standing_waves(&room, &params);

        let temp_file = NamedTempFile::new().unwrap();
        export_standing_waves_csv(&waves, &room, &params, temp_file.path()).unwrap();
        let content = read_back(temp_file.path());

        assert!(content.contains("Dimension;Mode;Frequency (Hz)"));
        assert!(content.contains("Length;1;42.88"));
        let data_rows = content
            .lines()
            .filter(|l| {
                l.starts_with("Length;") || l.starts_with("Width;") || l.starts_with("Height;")
            })
            .count();
        assert_eq!(data_rows, 6);
    }

    #[test]
    fn response_csv_has_header_and_all_samples() {
        let room = RoomGeometry::new(4.0, 3.0, 2.5);
        let params = AcousticParameters::new(343.0, 2);
        let modes = enumerate_modes(&room, &params);
        let curves = ResponseCurves::from_modes(&modes, 2, 200);

        let temp_file = NamedTempFile::new().unwrap();
        export_response_csv(&curves, temp_file.path()).unwrap();
        let content = read_back(temp_file.path());

        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("frequency_hz;axial;tangential;oblique;combined")
        );
        assert_eq!(lines.count(), 200);
        assert!(content.contains("0.000;"));
    }
}
