use crate::model::{ColorLut, CoreError, DisplaySetDescriptor, Labelmap3D};

use super::{LabelmapEntry, Result, SegmentEntry};

pub const UNLABELED_SEGMENT: &str = "(unlabeled)";

/// Derives the ordered labelmap list from the display sets referencing the
/// current series. Ascending by packed acquisition key; the sort is stable so
/// entries sharing a timestamp keep their input order.
pub fn list_labelmaps(
    display_sets: &[DisplaySetDescriptor],
    active_labelmap_index: usize,
) -> Vec<LabelmapEntry> {
    let mut ordered: Vec<&DisplaySetDescriptor> = display_sets.iter().collect();
    ordered.sort_by_key(|display_set| display_set.sort_key());
    ordered
        .into_iter()
        .map(|display_set| LabelmapEntry {
            labelmap_index: display_set.labelmap_index,
            title: title_for(display_set),
            description: format_acquisition(&display_set.series_date, &display_set.series_time),
            is_active: display_set.labelmap_index == active_labelmap_index,
        })
        .collect()
}

fn title_for(display_set: &DisplaySetDescriptor) -> String {
    if display_set.series_description.trim().is_empty() {
        format!("Segmentation {}", display_set.labelmap_index + 1)
    } else {
        display_set.series_description.clone()
    }
}

/// "20230101" + "090000" becomes "2023-01-01 09:00:00"; parts that do not
/// look like DICOM DA/TM values pass through unchanged. Display formatting
/// only; ordering always uses the packed key.
fn format_acquisition(date: &str, time: &str) -> String {
    let date_part = if date.len() == 8 && date.bytes().all(|byte| byte.is_ascii_digit()) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..8])
    } else {
        date.to_string()
    };
    let time_part = if time.len() >= 6 && time.as_bytes()[..6].iter().all(u8::is_ascii_digit) {
        format!("{}:{}:{}", &time[..2], &time[2..4], &time[4..6])
    } else {
        time.to_string()
    };
    format!("{date_part} {time_part}").trim().to_string()
}

/// Derives the ordered segment list for one labelmap: every distinct
/// non-background index painted on at least one slice, ascending by raw
/// index. Metadata misses fall back to the unlabeled policy; a color-table
/// miss is a data-integrity fault and is surfaced, never defaulted.
pub fn list_segments(
    labelmap: &Labelmap3D,
    lut: &ColorLut,
    expanded: Option<u16>,
) -> Result<Vec<SegmentEntry>> {
    let mut entries = Vec::new();
    for segment_index in labelmap.segments_in_use() {
        let (segment_number, label) = match labelmap.segment_metadata.get(segment_index) {
            Some(metadata) => (metadata.segment_number, metadata.segment_label.clone()),
            None => (segment_index, UNLABELED_SEGMENT.to_string()),
        };
        let color = lut
            .color_for(segment_index)
            .ok_or(CoreError::LookupMiss {
                lut_index: labelmap.color_lut_index,
                segment_index,
            })?;
        entries.push(SegmentEntry {
            segment_index,
            segment_number,
            label,
            color,
            is_selected: expanded == Some(segment_index),
        });
    }
    Ok(entries)
}
