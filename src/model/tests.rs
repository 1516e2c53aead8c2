use ndarray::array;

use super::{
    BACKGROUND_SEGMENT_INDEX, BrushConfig, ColorLut, CoreError, DisplaySetDescriptor, Labelmap3D,
    LabelmapSlice, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS, SegmentMetadata, SegmentMetadataMap,
    SeriesState,
};

fn descriptor(labelmap_index: usize, date: &str, time: &str) -> DisplaySetDescriptor {
    DisplaySetDescriptor {
        labelmap_index,
        series_date: date.to_string(),
        series_time: time.to_string(),
        series_description: String::new(),
        is_loaded: true,
    }
}

#[test]
fn slice_cache_from_pixel_data_is_distinct_and_sorted() {
    let pixels = array![[0_u16, 3, 1], [3, 0, 1]];
    let slice = LabelmapSlice::from_pixel_data(pixels);
    assert_eq!(slice.segments_on_slice(), &[0, 1, 3]);
}

#[test]
fn slice_from_segments_deduplicates() {
    let slice = LabelmapSlice::from_segments(vec![5, 2, 5, 2, 9]);
    assert_eq!(slice.segments_on_slice(), &[2, 5, 9]);
}

#[test]
fn segments_in_use_unions_slices_and_drops_background() {
    let mut labelmap = Labelmap3D::new(3);
    labelmap.set_slice(0, LabelmapSlice::from_segments(vec![0, 1, 3]));
    labelmap.set_slice(2, LabelmapSlice::from_segments(vec![0, 2, 3]));
    assert_eq!(labelmap.segments_in_use(), vec![1, 2, 3]);
}

#[test]
fn rebuild_slice_caches_tracks_pixel_edits() {
    let mut labelmap = Labelmap3D::new(1);
    labelmap.set_slice(0, LabelmapSlice::from_pixel_data(array![[0_u16, 1], [1, 1]]));
    labelmap.rebuild_slice_caches();
    assert_eq!(labelmap.segments_in_use(), vec![1]);
}

#[test]
fn sort_key_packs_date_and_time() {
    let earlier = descriptor(0, "20221231", "235959");
    let later = descriptor(1, "20230101", "090000");
    assert!(earlier.sort_key() < later.sort_key());
}

#[test]
fn sort_key_falls_back_to_zero_on_non_digits() {
    let unknown = descriptor(0, "unknown", "");
    assert_eq!(unknown.sort_key(), 0);
}

#[test]
fn brush_radius_is_clamped() {
    let mut brush = BrushConfig::default();
    brush.set_radius(0.25);
    assert_eq!(brush.radius(), MIN_BRUSH_RADIUS);
    brush.set_radius(1000.0);
    assert_eq!(brush.radius(), MAX_BRUSH_RADIUS);
}

#[test]
fn metadata_rejects_background_index() {
    let mut metadata = SegmentMetadataMap::new();
    let result = metadata.insert(
        BACKGROUND_SEGMENT_INDEX,
        SegmentMetadata {
            segment_number: 1,
            segment_label: "Liver".to_string(),
        },
    );
    assert_eq!(result, Err(CoreError::ReservedSegmentIndex));
}

#[test]
fn series_validate_checks_active_index_and_lut_references() {
    let mut series = SeriesState::new();
    assert!(series.validate(1).is_ok());

    series.push_labelmap(Labelmap3D::default());
    series.active_labelmap_index = 1;
    assert!(matches!(
        series.validate(1),
        Err(CoreError::LabelmapIndexOutOfRange { index: 1, count: 1 })
    ));

    series.active_labelmap_index = 0;
    series.labelmaps[0].color_lut_index = 3;
    assert!(matches!(
        series.validate(1),
        Err(CoreError::ColorLutIndexOutOfRange { index: 3, count: 1 })
    ));
}

#[test]
fn ensure_labelmap_grows_collection() {
    let mut series = SeriesState::new();
    series.ensure_labelmap(2);
    assert_eq!(series.labelmaps.len(), 3);
    assert_eq!(series.labelmaps[2].active_segment_index, 1);
}

#[test]
fn default_table_covers_requested_indices() {
    let lut = ColorLut::default_table(4);
    assert_eq!(lut.len(), 5);
    assert_eq!(lut.color_for(0).expect("background entry").a, 0);
    for index in 1..=4 {
        assert_eq!(lut.color_for(index).expect("segment entry").a, 255);
    }
    assert_eq!(lut.color_for(5), None);
}
