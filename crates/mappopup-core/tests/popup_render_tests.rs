//! Integration tests for template loading and popup rendering

use mappopup_core::{
    list_popup_templates, load_template, DataFrame, PopupConfig, PopupError, PopupRenderer,
    Template,
};
use mappopup_testkit::{sample_frame, temp_dir_in_workspace, write_template, POPUP_TEMPLATE};
use tempfile::TempDir;

fn popup_rows(popup: &str) -> Vec<&str> {
    popup.split("<tr").skip(1).collect()
}

/// End-to-end: file template, typed frame, one popup per record
#[test]
fn test_list_popup_templates_from_file() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "popup.html", POPUP_TEMPLATE);

    let frame = sample_frame();
    let popups = list_popup_templates(&path, &frame, &PopupConfig::default()).unwrap();

    assert_eq!(popups.len(), frame.n_rows());
    for popup in &popups {
        assert!(popup.starts_with("<html><head></head><body><table><tr"));
        assert!(popup.ends_with("</tr></table></body></html>"));
        assert!(!popup.contains('\n'));
        assert!(!popup.contains("<%=pop%>"));
        assert_eq!(popup_rows(popup).len(), frame.n_cols());
    }

    assert!(popups[0].contains(">Berlin&emsp;</td>"));
    assert!(popups[1].contains(">Paris&emsp;</td>"));
    assert!(popups[2].contains(">NA&emsp;</td>"));
    assert!(!popups[2].contains("Berlin"));
}

/// Row classes follow position, reserved names always get the coord class
#[test]
fn test_row_classes_per_field() {
    let frame = sample_frame();
    let renderer = PopupRenderer::new(Template::new("<%=pop%>"), &PopupConfig::default()).unwrap();
    let popups = renderer.render_frame(&frame).unwrap();

    let rows = popup_rows(&popups[0]);
    let names = frame.names();
    for (i, row) in rows.iter().enumerate() {
        let name = names[i].as_str();
        if ["Feature ID", "Longitude", "Latitude"].contains(&name) {
            assert!(row.starts_with(" class='coord'>"), "{} should be coord", name);
        } else if i % 2 == 0 {
            assert!(row.starts_with('>'), "{} should be primary", name);
        } else {
            assert!(row.starts_with(" class='alt'>"), "{} should be alt", name);
        }
    }
}

/// Lowercase coordinate names alternate like ordinary fields
#[test]
fn test_reserved_names_are_case_sensitive() {
    let renderer = PopupRenderer::new(Template::new("<%=pop%>"), &PopupConfig::default()).unwrap();
    let out = renderer
        .render_row(&["name", "longitude"], &["x", "1.0"])
        .unwrap();
    assert!(!out.contains("coord"));
    assert!(out.contains("<tr class='alt'><td></td><td><b>longitude&emsp;</b>"));
}

#[test]
fn test_row_index_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("popup.toml");
    std::fs::write(&config_path, "include_row_index = true\nspacer = \"\"\n").unwrap();

    let config = PopupConfig::from_file(&config_path).unwrap();
    let renderer = PopupRenderer::new(Template::new("[<%=pop%>]"), &config).unwrap();
    let out = renderer.render_row(&["a", "b"], &["1", "2"]).unwrap();

    assert_eq!(
        out,
        "[<tr><td>0</td><td><b>a</b></td><td align='right'>1</td></tr>\
         <tr class='alt'><td>1</td><td><b>b</b></td><td align='right'>2</td></tr>]"
    );
}

#[test]
fn test_missing_template_file() {
    let temp = TempDir::new().unwrap();
    let err = list_popup_templates(
        temp.path().join("absent.html"),
        &sample_frame(),
        &PopupConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PopupError::TemplateNotFound { .. }));
}

#[test]
fn test_template_without_placeholder_strict_and_lenient() {
    let temp = TempDir::new().unwrap();
    let path = write_template(temp.path(), "plain.html", "<div>\n</div>\n");

    let lenient = list_popup_templates(&path, &sample_frame(), &PopupConfig::default()).unwrap();
    assert!(lenient.iter().all(|p| p == "<div></div>"));

    let strict = PopupConfig {
        strict_placeholder: true,
        ..PopupConfig::default()
    };
    let err = list_popup_templates(&path, &sample_frame(), &strict).unwrap_err();
    assert!(matches!(err, PopupError::MissingPlaceholder { .. }));
}

#[test]
fn test_loaded_template_is_reusable() {
    let temp = TempDir::new().unwrap();
    let path = write_template(temp.path(), "popup.html", "X\n<%=pop%>\nY\n");
    let template = load_template(&path).unwrap();

    let renderer = PopupRenderer::new(template.clone(), &PopupConfig::default()).unwrap();
    let first = renderer.render_row(&["a"], &["1"]).unwrap();
    let second = renderer.render_row(&["a"], &["2"]).unwrap();

    assert_ne!(first, second);
    assert_eq!(renderer.template(), &template);
    assert_eq!(template.as_str(), "X<%=pop%>Y");
}

#[test]
fn test_ragged_frame_rejected() {
    let frame = DataFrame::new()
        .with_column("a", mappopup_core::Column::Integer(vec![Some(1), Some(2)]))
        .with_column("b", mappopup_core::Column::Integer(vec![Some(1)]));
    let renderer = PopupRenderer::new(Template::new("<%=pop%>"), &PopupConfig::default()).unwrap();
    assert!(matches!(
        renderer.render_frame(&frame),
        Err(PopupError::DimensionMismatch { .. })
    ));
}
