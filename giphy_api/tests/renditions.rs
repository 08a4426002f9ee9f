use giphy_api::types::{Gif, Rendition};
use giphy_api::Error;
use serde_json::json;

fn gif(value: serde_json::Value) -> Gif {
    serde_json::from_value(value).unwrap()
}

fn nested_gif() -> Gif {
    gif(json!({
        "id": "FiGiRei2ICzzG",
        "url": "https://giphy.com/gifs/funny-cat-FiGiRei2ICzzG",
        "rating": "g",
        "images": {
            "fixed_height": {
                "url": "https://media2.giphy.com/media/FiGiRei2ICzzG/200.gif",
                "width": "362",
                "height": "200",
                "size": "510751",
                "frames": "22",
                "mp4": "https://media2.giphy.com/media/FiGiRei2ICzzG/200.mp4"
            },
            "fixed_height_still": {
                "url": "https://media2.giphy.com/media/FiGiRei2ICzzG/200_s.gif",
                "width": "362",
                "height": "200"
            },
            "fixed_height_downsampled": {
                "url": "https://media2.giphy.com/media/FiGiRei2ICzzG/200_d.gif",
                "width": "362",
                "height": "200",
                "size": "119894"
            },
            "preview": {
                "width": "312",
                "height": "172",
                "mp4": "https://media2.giphy.com/media/FiGiRei2ICzzG/giphy-preview.mp4",
                "mp4_size": "49435"
            }
        }
    }))
}

fn legacy_gif() -> Gif {
    gif(json!({
        "id": "YsTs5ltWtEhnq",
        "url": "https://giphy.com/gifs/YsTs5ltWtEhnq",
        "rating": "pg",
        "image_url": "http://x/y/200.gif",
        "image_width": "100",
        "image_height": "50",
        "image_mp4_url": "http://x/y/200.mp4",
        "fixed_height_downsampled_width": "356",
        "fixed_width_downsampled_height": "113"
    }))
}

#[test]
fn nested_lookup() {
    let image = nested_gif().image(Rendition::FixedHeight, false).unwrap();
    assert_eq!(
        image.url,
        "https://media2.giphy.com/media/FiGiRei2ICzzG/200.gif"
    );
    assert_eq!(image.width, 362);
    assert_eq!(image.height, 200);
    assert_eq!(image.size, Some(510751));
    assert_eq!(image.frames, Some(22));
    assert_eq!(
        image.mp4_url.as_deref(),
        Some("https://media2.giphy.com/media/FiGiRei2ICzzG/200.mp4")
    );
}

#[test]
fn nested_still_lookup() {
    let image = nested_gif().image(Rendition::FixedHeight, true).unwrap();
    assert_eq!(
        image.url,
        "https://media2.giphy.com/media/FiGiRei2ICzzG/200_s.gif"
    );
    assert_eq!(image.mp4_url, None);
}

#[test]
fn downsampled_still_is_coerced() {
    let gif = nested_gif();
    let moving = gif.image(Rendition::FixedHeightDownsampled, false).unwrap();
    let still = gif.image(Rendition::FixedHeightDownsampled, true).unwrap();
    assert_eq!(still, moving);
}

#[test]
fn downsampled_still_is_coerced_on_the_legacy_shape() {
    let gif = legacy_gif();
    let moving = gif.image(Rendition::FixedWidthDownsampled, false).unwrap();
    let still = gif.image(Rendition::FixedWidthDownsampled, true).unwrap();
    assert_eq!(still, moving);
    assert!(moving.url.ends_with("200w_d.gif"));
}

#[test]
fn nested_missing_rendition_is_a_data_format_error() {
    // no fixed_width entry in the map
    assert!(matches!(
        nested_gif().image(Rendition::FixedWidth, false),
        Err(Error::DataFormat(_))
    ));
}

#[test]
fn nested_entry_missing_url_is_a_data_format_error() {
    let gif = gif(json!({
        "id": "a",
        "url": "https://giphy.com/gifs/a",
        "rating": "g",
        "images": {
            "original": {"width": "10", "height": "10"}
        }
    }));
    assert!(matches!(
        gif.image(Rendition::Original, false),
        Err(Error::DataFormat(_))
    ));
}

#[test]
fn nested_integer_dimensions_are_accepted() {
    let gif = gif(json!({
        "id": "a",
        "url": "https://giphy.com/gifs/a",
        "rating": "g",
        "images": {
            "original": {"url": "https://media2.giphy.com/media/a/giphy.gif", "width": 500, "height": 276}
        }
    }));
    let image = gif.image(Rendition::Original, false).unwrap();
    assert_eq!(image.width, 500);
    assert_eq!(image.height, 276);
    assert_eq!(image.mp4_url, None);
}

#[test]
fn legacy_original() {
    let image = legacy_gif().image(Rendition::Original, false).unwrap();
    assert_eq!(image.url, "http://x/y/200.gif");
    assert_eq!(image.width, 100);
    assert_eq!(image.height, 50);
    assert_eq!(image.mp4_url.as_deref(), Some("http://x/y/200.mp4"));
    assert_eq!(image.size, None);
    assert_eq!(image.frames, None);
}

#[test]
fn legacy_fixed_height() {
    let image = legacy_gif().image(Rendition::FixedHeight, false).unwrap();
    assert_eq!(image.url, "http://x/y/200.gif");
    assert_eq!(image.width, 356);
    assert_eq!(image.height, 200);
    assert_eq!(image.mp4_url.as_deref(), Some("http://x/y/200.mp4"));
}

#[test]
fn legacy_fixed_height_downsampled() {
    let image = legacy_gif()
        .image(Rendition::FixedHeightDownsampled, false)
        .unwrap();
    assert_eq!(image.url, "http://x/y/200_d.gif");
    assert_eq!(image.width, 356);
    assert_eq!(image.height, 200);
    assert_eq!(image.mp4_url.as_deref(), Some("http://x/y/200_d.mp4"));
}

#[test]
fn legacy_fixed_width() {
    let image = legacy_gif().image(Rendition::FixedWidth, false).unwrap();
    assert_eq!(image.url, "http://x/y/200w.gif");
    assert_eq!(image.width, 200);
    assert_eq!(image.height, 113);
    assert_eq!(image.mp4_url.as_deref(), Some("http://x/y/200w.mp4"));
}

#[test]
fn legacy_fixed_width_downsampled() {
    let image = legacy_gif()
        .image(Rendition::FixedWidthDownsampled, false)
        .unwrap();
    assert_eq!(image.url, "http://x/y/200w_d.gif");
    assert_eq!(image.width, 200);
    assert_eq!(image.height, 113);
}

#[test]
fn legacy_still_swaps_the_extension_and_drops_the_mp4() {
    let image = legacy_gif().image(Rendition::FixedHeight, true).unwrap();
    assert_eq!(image.url, "http://x/y/200_s.gif");
    assert!(image.url.ends_with("_s.gif"));
    assert_eq!(image.mp4_url, None);
}

#[test]
fn legacy_original_still() {
    let image = legacy_gif().image(Rendition::Original, true).unwrap();
    assert_eq!(image.url, "http://x/y/200_s.gif");
    assert_eq!(image.mp4_url, None);
    assert_eq!(image.width, 100);
    assert_eq!(image.height, 50);
}

#[test]
fn legacy_missing_mp4_stays_absent() {
    let gif = gif(json!({
        "id": "a",
        "url": "https://giphy.com/gifs/a",
        "rating": "g",
        "image_url": "http://x/y/giphy.gif",
        "image_width": "400",
        "image_height": "225",
        "fixed_height_downsampled_width": "356",
        "fixed_width_downsampled_height": "113"
    }));
    let image = gif.image(Rendition::Original, false).unwrap();
    assert_eq!(image.mp4_url, None);
}
