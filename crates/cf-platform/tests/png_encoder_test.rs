use std::io::Cursor;

use cf_core::ports::{ImageEncodeError, PngEncoderPort};
use cf_core::{RawImage, RawImageFormat};
use cf_platform::ImageCratePngEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};

fn sample(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 13) as u8, 200, 255])
    }))
}

fn encode_as(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

#[test]
fn tiff_is_converted_to_png_with_same_dimensions() {
    let tiff = encode_as(&sample(37, 21), ImageFormat::Tiff);

    let png = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(RawImageFormat::Tiff, tiff))
        .unwrap();

    assert_eq!((png.width(), png.height()), (37, 21));
    assert_eq!(
        image::guess_format(png.bytes()).unwrap(),
        ImageFormat::Png
    );
    let decoded = image::load_from_memory_with_format(png.bytes(), ImageFormat::Png).unwrap();
    assert_eq!(decoded.dimensions(), (37, 21));
    assert_eq!(decoded.to_rgba8().get_pixel(3, 2), &Rgba([21, 26, 200, 255]));
}

#[test]
fn bmp_is_converted_to_png() {
    let bmp = encode_as(&sample(8, 5), ImageFormat::Bmp);

    let png = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(RawImageFormat::Bmp, bmp))
        .unwrap();

    let decoded = image::load_from_memory(png.bytes()).unwrap();
    assert_eq!(decoded.dimensions(), (8, 5));
}

#[test]
fn rgba_pixels_are_encoded() {
    let pixels = sample(4, 3).to_rgba8().into_raw();

    let png = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(
            RawImageFormat::Rgba8 {
                width: 4,
                height: 3,
            },
            pixels,
        ))
        .unwrap();

    assert_eq!((png.width(), png.height()), (4, 3));
    assert_eq!(image::guess_format(png.bytes()).unwrap(), ImageFormat::Png);
}

#[test]
fn png_is_passed_through_unchanged() {
    let original = encode_as(&sample(10, 10), ImageFormat::Png);

    let png = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(RawImageFormat::Png, original.clone()))
        .unwrap();

    assert_eq!(png.bytes(), original.as_slice());
    assert_eq!((png.width(), png.height()), (10, 10));
}

#[test]
fn short_pixel_buffer_is_rejected() {
    let err = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(
            RawImageFormat::Rgba8 {
                width: 4,
                height: 3,
            },
            vec![0; 10],
        ))
        .unwrap_err();

    assert!(matches!(
        err,
        ImageEncodeError::InvalidPixelBuffer {
            width: 4,
            height: 3,
            actual: 10
        }
    ));
}

#[test]
fn garbage_tiff_is_a_decode_error() {
    let err = ImageCratePngEncoder::new()
        .encode_png(&RawImage::new(RawImageFormat::Tiff, b"not a tiff".to_vec()))
        .unwrap_err();

    match err {
        ImageEncodeError::Decode { format, .. } => assert_eq!(format, "tiff"),
        other => panic!("unexpected error: {other}"),
    }
}
