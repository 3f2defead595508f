use enough::Unstoppable;
use plainpnm::*;

#[test]
fn ppm_roundtrip() {
    let image = ColorImage::from_fn(5, 7, |row, col| ColorPixel {
        r: (row * 31 + col * 17) as u8,
        g: (row * 53 + col * 101) as u8,
        b: (row * 7 + col * 211) as u8,
    })
    .unwrap();

    let encoded = pnm::encode_ppm(&image, &Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"P3");

    let decoded = pnm::decode_ppm(&encoded, &Unstoppable).unwrap();
    assert_eq!(decoded.height(), 5);
    assert_eq!(decoded.width(), 7);
    assert_eq!(decoded.pixels(), image.pixels());
}

#[test]
fn pgm_roundtrip() {
    let image = GreyImage::from_fn(3, 4, |row, col| GreyPixel {
        value: (row * 83 + col * 47) as u8,
    })
    .unwrap();

    let encoded = pnm::encode_pgm(&image, &Unstoppable).unwrap();
    let decoded = pnm::decode_pgm(&encoded, &Unstoppable).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn binary_pgm_output_is_exact() {
    let mut image = BinaryImage::new(2, 2).unwrap();
    image[(0, 0)] = BinaryPixel::ON;
    image[(1, 1)] = BinaryPixel::ON;

    let encoded = pnm::encode_binary_pgm(&image, &Unstoppable).unwrap();
    assert_eq!(
        encoded,
        b"P2\n# created by plainpnm\n2 2\n255\n255 0 0 255\n"
    );
}

#[test]
fn encoded_lines_stay_under_70_columns() {
    let image = GreyImage::from_fn(4, 100, |_, _| GreyPixel { value: 255 }).unwrap();
    let encoded = pnm::encode_pgm(&image, &Unstoppable).unwrap();
    for line in encoded.split(|&b| b == b'\n') {
        assert!(line.len() <= 70, "line of {} chars", line.len());
    }
}

#[test]
fn decode_dispatches_on_magic() {
    let grey = GreyImage::new(2, 3).unwrap();
    let encoded = pnm::encode_pgm(&grey, &Unstoppable).unwrap();
    match pnm::decode(&encoded, &Unstoppable).unwrap() {
        AnyImage::Grey(img) => assert_eq!(img, grey),
        other => panic!("expected grey image, got {other:?}"),
    }

    let color = ColorImage::new(2, 3).unwrap();
    let encoded = pnm::encode_ppm(&color, &Unstoppable).unwrap();
    let decoded = pnm::decode(&encoded, &Unstoppable).unwrap();
    assert!(matches!(decoded, AnyImage::Color(_)));
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.width(), 3);
}

#[test]
fn image_info_probe() {
    let image = ColorImage::new(2, 1).unwrap();
    let encoded = pnm::encode_ppm(&image, &Unstoppable).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.maxval, 255);
    assert_eq!(info.format, PnmFormat::Ppm);
}

#[test]
fn limits_reject_large() {
    let image = GreyImage::new(2, 2).unwrap();
    let encoded = pnm::encode_pgm(&image, &Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(&Unstoppable);
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.ppm");

    let image = ColorImage::from_fn(3, 3, |row, col| ColorPixel {
        r: (row * 80) as u8,
        g: (col * 80) as u8,
        b: 200,
    })
    .unwrap();

    export_ppm(&path, &image).unwrap();
    let back = import_ppm(&path).unwrap();
    assert_eq!(back, image);

    match import(&path).unwrap() {
        AnyImage::Color(img) => assert_eq!(img, image),
        other => panic!("expected color image, got {other:?}"),
    }
}

#[test]
fn import_missing_file_is_io_error() {
    let err = import("definitely/not/a/real/path.ppm").unwrap_err();
    assert!(matches!(err, PnmError::Io(_)));
}
