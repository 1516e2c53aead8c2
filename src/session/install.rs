use ndarray::Array2;

use crate::model::{
    ColorLut, CoreError, DisplaySetDescriptor, Labelmap3D, LabelmapSlice, Rgba, SegmentMetadata,
    SeriesState,
};
use crate::runtime::AppContext;

use super::{LabelmapSpec, Result, SEGMENTATION_MODALITY, SessionSpec, SliceSpec};

/// Materializes a session description into runtime state: color tables,
/// per-series tool state, and the display-set catalog. Only
/// segmentation-modality display sets are registered; other derived data is
/// not the panel's to list.
pub fn install_session(app: &mut AppContext, spec: &SessionSpec) -> Result<()> {
    spec.validate()?;

    let lut_offsets: Vec<usize> = spec
        .color_luts
        .iter()
        .map(|lut| {
            let colors = lut
                .colors
                .iter()
                .map(|[r, g, b, a]| Rgba::new(*r, *g, *b, *a))
                .collect();
            app.luts_mut().register(ColorLut::new(colors))
        })
        .collect();

    let mut series = SeriesState::new();
    for labelmap_spec in &spec.labelmaps {
        let labelmap = build_labelmap(labelmap_spec, &lut_offsets)?;
        series.push_labelmap(labelmap);
    }
    series.active_labelmap_index = spec.active_labelmap_index;
    if let Some(radius) = spec.brush_radius {
        series.brush.set_radius(radius);
    }
    series.validate(app.luts().len())?;

    let labelmap_count = series.labelmaps.len();
    app.store_mut()
        .mutate(&spec.series_key, |state| *state = series);

    for display_set in &spec.display_sets {
        if display_set.modality != SEGMENTATION_MODALITY {
            continue;
        }
        let descriptor = DisplaySetDescriptor {
            labelmap_index: display_set.labelmap_index,
            series_date: display_set.series_date.clone(),
            series_time: display_set.series_time.clone(),
            series_description: display_set.series_description.clone(),
            is_loaded: display_set.is_loaded,
        };
        app.catalog_mut()
            .insert(&spec.series_key, descriptor, display_set.loadable);
    }

    tracing::info!(
        series_key = spec.series_key.as_str(),
        labelmaps = labelmap_count,
        "session installed"
    );
    Ok(())
}

fn build_labelmap(spec: &LabelmapSpec, lut_offsets: &[usize]) -> Result<Labelmap3D> {
    let mut labelmap = Labelmap3D::new(spec.slices.len());
    labelmap.active_segment_index = spec.active_segment_index;
    labelmap.color_lut_index = if lut_offsets.is_empty() {
        0
    } else {
        lut_offsets[spec.color_lut_index]
    };
    for metadata in &spec.segment_metadata {
        labelmap.segment_metadata.insert(
            metadata.segment_index,
            SegmentMetadata {
                segment_number: metadata.segment_number,
                segment_label: metadata.segment_label.clone(),
            },
        )?;
    }
    for (frame, slice) in spec.slices.iter().enumerate() {
        let Some(slice) = slice else { continue };
        let built = match slice {
            SliceSpec::Segments { segments } => LabelmapSlice::from_segments(segments.clone()),
            SliceSpec::Pixels { shape, values } => {
                let pixels = Array2::from_shape_vec((shape[0], shape[1]), values.clone()).map_err(
                    |_| CoreError::PixelShapeMismatch {
                        len: values.len(),
                        rows: shape[0],
                        cols: shape[1],
                    },
                )?;
                LabelmapSlice::from_pixel_data(pixels)
            }
        };
        labelmap.set_slice(frame, built);
    }
    Ok(labelmap)
}
