#[macro_export]
macro_rules! stream_from_bytes {
    ($b : expr) => {{
        $crate::encoding::DecodingStream::from_bytes($b.as_bytes()).unwrap()
    }};
}
