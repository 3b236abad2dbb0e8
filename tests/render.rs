mod common;

use common::*;
use title_card::layout::{wrap_text, LayoutMode};
use title_card::{FaceRole, FontRef, Image, Px, Rect};

#[test]
fn centered_card_draws_title_and_illustration() {
    let composer = composer();
    let frame = solid(1200, 1600, PAPER);
    let illustration = solid(300, 200, RED);

    let card = composer.render(
        &frame,
        Some(&illustration),
        LayoutMode::Centered,
        "The quick brown fox jumps",
        "",
    );

    assert_eq!(card.title_lines, vec!["The quick brown fox ", "jumps"]);
    let placed = card.layout.illustration().copied();
    assert_eq!(
        placed,
        Some(Rect::from_origin_size(Px(100.0), Px(680.0), Px(1000.0), Px(666.0)))
    );

    // inside the first block of the first line
    assert_eq!(card.image.get_pixel(205, 250), &INK);
    // middle of the illustration
    let middle = card.image.get_pixel(600, 1013);
    assert!(middle.0[0] > 200 && middle.0[1] < 50, "{middle:?}");
    // margins and the space under the illustration stay untouched
    assert_eq!(card.image.get_pixel(50, 1000), &PAPER);
    assert_eq!(card.image.get_pixel(600, 1500), &PAPER);
}

#[test]
fn illustration_never_covers_the_text() {
    let composer = composer();
    let card = composer.render(
        &solid(2400, 1260, PAPER),
        Some(&solid(100, 100, RED)),
        LayoutMode::Vertical,
        "A title that is long enough to need a second line of text",
        "With a subtitle",
    );

    let illustration = card.layout.illustration().copied().expect("room for an illustration");
    for span in card
        .layout
        .spans(FaceRole::Title)
        .chain(card.layout.spans(FaceRole::Subtitle))
    {
        let bottom = span.coords.1 + Px(120.0);
        assert!(bottom <= illustration.y1, "{span:?} overlaps {illustration:?}");
    }
    assert!(illustration.y2 <= Px(1260.0 - 126.0));
}

#[test]
fn manual_lines_are_used_verbatim() {
    let composer = composer();
    let lines = vec![
        "a line far too wide for any canvas we are going to render".to_string(),
        "short".to_string(),
    ];
    let card = composer.render(
        &solid(1200, 630, PAPER),
        None,
        LayoutMode::Horizontal,
        &lines[..],
        "",
    );

    assert_eq!(card.title_lines, lines);
    let texts: Vec<&str> = card
        .layout
        .spans(FaceRole::Title)
        .map(|span| span.text.as_str())
        .collect();
    assert_eq!(texts, vec![lines[0].as_str(), lines[1].as_str()]);
}

#[test]
fn rendering_twice_is_identical() {
    let composer = composer();
    let frame = solid(2400, 1260, PAPER);
    let illustration = solid(400, 300, RED);
    let render = || {
        composer.render(
            &frame,
            Some(&illustration),
            LayoutMode::Horizontal,
            "引出物の相場の基本的な考え方",
            "",
        )
    };
    let (a, b) = (render(), render());

    assert_eq!(a.layout, b.layout);
    assert_eq!(a.image, b.image);
}

#[test]
fn png_output_keeps_the_frame_size() {
    let composer = composer();
    let card = composer.render(&solid(1200, 630, PAPER), None, LayoutMode::Vertical, "Title", "");
    let decoded = Image::new_from_memory(&card.to_png_bytes().expect("can encode"))
        .expect("can decode");
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
}

#[test]
fn wrapped_lines_rebuild_the_title() {
    let composer = composer();
    let title = lipsum::lipsum_words(60);
    let lines = wrap_text(
        &title,
        FontRef::new(&FACE, Px(120.0)),
        Px(960.0),
        &composer.config().break_rules,
    );
    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), title);
}
