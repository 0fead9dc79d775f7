use libduckdb_sys::duckdb_string_t;

/// Strings up to this length are stored inline in the `duckdb_string_t`
/// union instead of behind a pointer.
const INLINE_CAPACITY: u32 = 12;

/// Decode one DuckDB-owned VARCHAR cell into an owned Rust `String`.
///
/// # Safety
///
/// `s` must reference a live, non-NULL string row handed out by DuckDB for
/// the current function invocation. Callers must do their row NULL checks
/// before calling this.
pub unsafe fn decode_duckdb_string(s: &duckdb_string_t) -> String {
    // SAFETY: the length prefix occupies the same bytes in both union layouts.
    let len = unsafe { s.value.inlined.length };

    let bytes = if len <= INLINE_CAPACITY {
        // SAFETY: inlined strings hold `len <= 12` initialized bytes in place.
        unsafe {
            let inlined = &s.value.inlined.inlined;
            std::slice::from_raw_parts(inlined.as_ptr() as *const u8, len as usize)
        }
    } else {
        // SAFETY: longer strings store a DuckDB-owned pointer to `len` bytes,
        // valid for the duration of this invocation.
        unsafe { std::slice::from_raw_parts(s.value.pointer.ptr as *const u8, len as usize) }
    };

    String::from_utf8_lossy(bytes).into_owned()
}
