use super::*;

const BAR: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='10' height='4' viewBox='0 0 10 4'>\
                   <path d='M0 0 L10 0 L10 4 L0 4 Z'/></svg>";

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "vectormation_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn document_path_only_maps_plain_names() {
    let ctx = TextContext::new("/work");
    assert_eq!(
        ctx.document_path("title-1_a"),
        Some(PathBuf::from("/work/text/title-1_a.svg"))
    );
    assert_eq!(ctx.document_path("../etc/passwd"), None);
    assert_eq!(ctx.document_path("x^2"), None);
    assert_eq!(ctx.document_path(""), None);
}

#[test]
fn in_memory_documents_take_precedence() {
    let renderer = StaticTextRenderer::new().with("x^2", BAR);
    let rendered = renderer.render("x^2", &TextContext::default()).unwrap();
    assert_eq!(rendered.view_box, Rect::new(0.0, 0.0, 10.0, 4.0));
    assert_eq!(rendered.fragments.len(), 1);
}

#[test]
fn unknown_content_without_a_file_name_is_a_config_error() {
    let renderer = StaticTextRenderer::new();
    assert!(matches!(
        renderer.render("a + b", &TextContext::default()),
        Err(VectorError::Config(_))
    ));
}

#[test]
fn documents_are_read_from_the_work_dir() {
    let tmp = temp_dir("text_lookup");
    std::fs::create_dir_all(tmp.join("text")).unwrap();
    std::fs::write(tmp.join("text").join("bar.svg"), BAR).unwrap();

    let ctx = TextContext::new(&tmp);
    let rendered = StaticTextRenderer::new().render("bar", &ctx).unwrap();
    assert_eq!(rendered.fragments[0].d, "M 0,0 L 10,0 L 10,4 L 0,4 L 0,0");

    let missing = StaticTextRenderer::new().render("nope", &ctx);
    assert!(matches!(missing, Err(VectorError::Other(_))));
    let _ = std::fs::remove_dir_all(&tmp);
}
