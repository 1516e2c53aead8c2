use crate::runtime::AppContext;

use super::{
    DisplaySetSpec, LabelmapSpec, LutSpec, SegmentMetadataSpec, SessionError, SessionSpec,
    SliceSpec, install_session, load_session, save_session,
};

fn sample_spec() -> SessionSpec {
    SessionSpec {
        series_key: "1.2.840.113619.2.55.3".to_string(),
        display_sets: vec![
            DisplaySetSpec {
                labelmap_index: 0,
                modality: "SEG".to_string(),
                series_date: "20230101".to_string(),
                series_time: "090000".to_string(),
                series_description: "Liver study".to_string(),
                is_loaded: true,
                loadable: true,
            },
            DisplaySetSpec {
                labelmap_index: 1,
                modality: "SEG".to_string(),
                series_date: "20221231".to_string(),
                series_time: "235959".to_string(),
                series_description: String::new(),
                is_loaded: false,
                loadable: true,
            },
        ],
        labelmaps: vec![
            LabelmapSpec {
                slices: vec![
                    Some(SliceSpec::Segments {
                        segments: vec![0, 1, 3],
                    }),
                    None,
                    Some(SliceSpec::Pixels {
                        shape: [2, 2],
                        values: vec![0, 2, 2, 0],
                    }),
                ],
                active_segment_index: 1,
                color_lut_index: 0,
                segment_metadata: vec![SegmentMetadataSpec {
                    segment_index: 2,
                    segment_number: 2,
                    segment_label: "Liver".to_string(),
                }],
            },
            LabelmapSpec {
                slices: vec![Some(SliceSpec::Segments { segments: vec![5] })],
                active_segment_index: 5,
                color_lut_index: 0,
                segment_metadata: Vec::new(),
            },
        ],
        color_luts: Vec::new(),
        active_labelmap_index: 0,
        brush_radius: Some(12.0),
    }
}

#[test]
fn json_and_yaml_round_trip_to_the_same_spec() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spec = sample_spec();

    let json_path = dir.path().join("session.json");
    save_session(&json_path, &spec).expect("save json");
    let from_json = load_session(&json_path).expect("load json");

    let yaml_path = dir.path().join("session.yaml");
    save_session(&yaml_path, &spec).expect("save yaml");
    let from_yaml = load_session(&yaml_path).expect("load yaml");

    assert_eq!(from_json, spec);
    assert_eq!(from_yaml, from_json);
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        load_session(&path),
        Err(SessionError::SerdeJson(_))
    ));
}

#[test]
fn validate_rejects_dangling_display_set_reference() {
    let mut spec = sample_spec();
    spec.display_sets[1].labelmap_index = 9;
    assert!(matches!(spec.validate(), Err(SessionError::Parse(_))));
}

#[test]
fn validate_rejects_background_metadata() {
    let mut spec = sample_spec();
    spec.labelmaps[0].segment_metadata[0].segment_index = 0;
    assert!(matches!(spec.validate(), Err(SessionError::Parse(_))));
}

#[test]
fn validate_rejects_pixel_shape_mismatch() {
    let mut spec = sample_spec();
    spec.labelmaps[0].slices[2] = Some(SliceSpec::Pixels {
        shape: [2, 2],
        values: vec![0, 1, 2],
    });
    assert!(matches!(spec.validate(), Err(SessionError::Parse(_))));
}

#[test]
fn validate_rejects_out_of_range_active_labelmap() {
    let mut spec = sample_spec();
    spec.active_labelmap_index = 5;
    assert!(matches!(spec.validate(), Err(SessionError::Parse(_))));
}

#[test]
fn validate_rejects_unknown_color_lut() {
    let mut spec = sample_spec();
    spec.labelmaps[1].color_lut_index = 3;
    assert!(matches!(spec.validate(), Err(SessionError::Parse(_))));
}

#[test]
fn install_populates_store_catalog_and_brush() {
    let spec = sample_spec();
    let mut app = AppContext::new();
    install_session(&mut app, &spec).expect("install");

    let state = app.store().series_state(&spec.series_key).expect("series");
    assert_eq!(state.labelmaps.len(), 2);
    assert_eq!(state.active_labelmap_index, 0);
    assert_eq!(state.brush.radius(), 12.0);
    assert_eq!(state.labelmaps[0].segments_in_use(), vec![1, 2, 3]);

    let descriptors = app.catalog().descriptors(&spec.series_key);
    assert_eq!(descriptors.len(), 2);
}

#[test]
fn install_skips_non_segmentation_display_sets() {
    let mut spec = sample_spec();
    spec.display_sets[1].modality = "MR".to_string();
    spec.display_sets[1].labelmap_index = 0;
    let mut app = AppContext::new();
    install_session(&mut app, &spec).expect("install");
    assert_eq!(app.catalog().descriptors(&spec.series_key).len(), 1);
}

#[test]
fn install_offsets_session_luts_past_the_stock_table() {
    let mut spec = sample_spec();
    spec.color_luts = vec![LutSpec {
        colors: vec![[0, 0, 0, 0], [200, 30, 30, 255]],
    }];
    let mut app = AppContext::new();
    install_session(&mut app, &spec).expect("install");

    let state = app.store().series_state(&spec.series_key).expect("series");
    let lut_index = state.labelmaps[0].color_lut_index;
    assert_eq!(lut_index, 1);
    let lut = app.luts().table(lut_index).expect("table");
    assert_eq!(lut.color_for(1).expect("entry").r, 200);
}
