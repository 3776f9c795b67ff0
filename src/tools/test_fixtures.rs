//! 測試用的 EXIF JPEG 產生器
//!
//! 單元測試與 `tests/` 整合測試共用此檔

/// 產生只含 APP1 Exif 區段的最小 JPEG，`DateTimeOriginal` 為指定字串
pub fn jpeg_with_capture_date(date: &str) -> Vec<u8> {
    build_exif_jpeg(date, false)
}

/// 同上，另外在旁邊放一個偏移量超出資料範圍的 `DateTimeDigitized` 欄位
pub fn jpeg_with_broken_neighbour_field(date: &str) -> Vec<u8> {
    build_exif_jpeg(date, true)
}

/// 沒有任何 Exif 區段的 JPEG
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

fn build_exif_jpeg(date: &str, broken_neighbour: bool) -> Vec<u8> {
    let mut value = date.as_bytes().to_vec();
    value.push(0);
    // 小於等於 4 bytes 的值會內嵌在項目中，這裡固定使用偏移量
    assert!(value.len() > 4, "測試用日期字串過短");

    let exif_ifd_offset: u32 = 26;
    let entry_count: u16 = if broken_neighbour { 2 } else { 1 };
    let value_offset = exif_ifd_offset + 2 + 12 * u32::from(entry_count) + 4;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\0\x2a");
    tiff.extend_from_slice(&8u32.to_be_bytes());

    // IFD0：只有指向 Exif IFD 的指標
    tiff.extend_from_slice(&1u16.to_be_bytes());
    push_entry(&mut tiff, 0x8769, 4, 1, exif_ifd_offset);
    tiff.extend_from_slice(&0u32.to_be_bytes());

    // Exif IFD：DateTimeOriginal (ASCII)
    tiff.extend_from_slice(&entry_count.to_be_bytes());
    push_entry(&mut tiff, 0x9003, 2, value.len() as u32, value_offset);
    if broken_neighbour {
        push_entry(&mut tiff, 0x9004, 2, 20, 0xFFFF);
    }
    tiff.extend_from_slice(&0u32.to_be_bytes());
    tiff.extend_from_slice(&value);

    let segment_length = (2 + 6 + tiff.len()) as u16;
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_length.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

fn push_entry(tiff: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, offset: u32) {
    tiff.extend_from_slice(&tag.to_be_bytes());
    tiff.extend_from_slice(&field_type.to_be_bytes());
    tiff.extend_from_slice(&count.to_be_bytes());
    tiff.extend_from_slice(&offset.to_be_bytes());
}
