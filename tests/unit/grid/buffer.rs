use super::*;
use crate::foundation::core::Rect;

#[test]
fn new_rejects_negative_dimensions() {
    assert!(matches!(
        Grid::new(-1, 4, 0u8),
        Err(RasterError::InvalidDimensions(_))
    ));
    assert!(matches!(
        Grid::new(4, -1, 0u8),
        Err(RasterError::InvalidDimensions(_))
    ));
}

#[test]
fn zero_sized_grid_is_allowed() {
    let g = Grid::new(0, 0, 0u8).unwrap();
    assert_eq!(g.cells().len(), 0);
    assert!(!g.bounds().is_valid());
}

#[test]
fn resize_rejects_before_mutating() {
    let mut g = Grid::new(3, 2, 7u8).unwrap();
    assert!(g.resize(-2, 5, 0).is_err());
    assert_eq!((g.width(), g.height()), (3, 2));
    assert!(g.cells().iter().all(|&c| c == 7));

    g.resize(4, 4, 1).unwrap();
    assert_eq!((g.width(), g.height()), (4, 4));
    assert_eq!(g.cells().len(), 16);
    assert!(g.cells().iter().all(|&c| c == 1));
}

#[test]
fn get_set_roundtrip_row_major() {
    let mut g = Grid::new(4, 3, 0i32).unwrap();
    g.set(3, 1, 42);
    assert_eq!(g.get(3, 1), 42);
    assert_eq!(g.cells()[4 + 3], 42);
    assert_eq!(g.try_get(4, 1), None);
    assert_eq!(g.try_get(-1, 0), None);
}

#[test]
#[should_panic]
fn get_out_of_bounds_panics() {
    let g = Grid::new(2, 2, 0u8).unwrap();
    let _ = g.get(2, 0);
}

#[test]
fn raw_view_matches_cell_layout() {
    let mut g = Grid::new(5, 3, 0u16).unwrap();
    assert!(g.supports_raw_access());
    {
        let mut view = g.raw_access_mut().unwrap();
        assert_eq!(view.offset(), 0);
        assert_eq!(view.stride(), 5);
        view.span_mut(2, 1, 3).fill(9);
    }
    assert_eq!(g.get(0, 2), 0);
    assert_eq!(g.get(1, 2), 9);
    assert_eq!(g.get(3, 2), 9);
    assert_eq!(g.get(4, 2), 0);
    assert_eq!(g.raw_access().unwrap().span(2, 0, 4), &[0, 9, 9, 9, 0]);
}

#[test]
fn backends_follow_cell_type() {
    let bytes = Grid::new(1, 1, 0u8).unwrap();
    assert_eq!(bytes.backends(), &[Backend::RawMemory, Backend::Generic]);
    let pixels = Bitmap::new(1, 1, Pixel::TRANSPARENT).unwrap();
    assert_eq!(
        pixels.backends(),
        &[
            Backend::ColorCompositing,
            Backend::RawMemory,
            Backend::Generic
        ]
    );
}

#[test]
fn clip_stack_is_owned_per_grid() {
    let mut a = Grid::new(10, 10, 0u8).unwrap();
    let b = Grid::new(10, 10, 0u8).unwrap();
    a.push_clip(Rect::from_coords(0, 0, 4, 4));
    assert_eq!(a.clip(), Rect::from_coords(0, 0, 4, 4));
    assert_eq!(b.clip(), b.bounds());
    a.pop_clip().unwrap();
    assert!(matches!(
        a.pop_clip(),
        Err(RasterError::InvalidClipState(_))
    ));
}

#[test]
fn rgba_image_roundtrip_preserves_pixels() {
    let mut bm = Bitmap::new(2, 2, Pixel::TRANSPARENT).unwrap();
    bm.set(0, 0, Pixel::new(128, 255, 0, 0));
    bm.set(1, 1, Pixel::rgb(1, 2, 3));

    let img = bm.to_rgba_image();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3, 255]);

    let back = Bitmap::from_rgba_image(&img).unwrap();
    assert_eq!(back.cells(), bm.cells());
}

#[test]
fn decode_reads_encoded_png() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, image::Rgba([1, 2, 3, 4]));
    let mut png = std::io::Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png).unwrap();

    let bitmap = Bitmap::decode(png.get_ref()).unwrap();
    assert_eq!((bitmap.width(), bitmap.height()), (2, 1));
    assert_eq!(bitmap.get(0, 0), Pixel::new(255, 10, 20, 30));
    assert_eq!(bitmap.get(1, 0), Pixel::new(4, 1, 2, 3));
}

#[test]
fn decode_failure_is_wrapped() {
    let err = Bitmap::decode(b"not an image").unwrap_err();
    assert!(matches!(err, RasterError::Other(_)));
    assert!(err.to_string().contains("decode image from memory"));
}
