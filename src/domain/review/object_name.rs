//! Deterministic archive object names

use super::slot::RecordingSlot;

/// Extension used when the uploaded file name carries none
pub const DEFAULT_EXTENSION: &str = "webm";

/// Longest extension kept from an uploaded file name
const MAX_EXTENSION_LEN: usize = 5;

/// Reduce free text to a filesystem-safe stem.
///
/// Lower-cases, collapses whitespace runs into `_` and drops everything
/// outside `[a-z0-9_-]`.
pub fn safe_stem(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }

    out
}

/// Extension of an uploaded file name, reduced to `[a-z0-9]`.
///
/// `None` when the name has no dot, or nothing survives the filter.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext: String = ext
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(MAX_EXTENSION_LEN)
        .collect();
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Object name for one archived recording, e.g.
/// `budi_santoso_oktober_saran_direksi.webm`
pub fn archive_object_name(
    subject: &str,
    period: &str,
    slot: RecordingSlot,
    file_name: Option<&str>,
) -> String {
    let stem = safe_stem(&format!("{}_{}_{}", subject, period, slot.archive_label()));
    let extension = file_name
        .and_then(file_extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    format!("{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_lowercases_and_joins_whitespace() {
        assert_eq!(safe_stem("Budi  Santoso\tOktober"), "budi_santoso_oktober");
    }

    #[test]
    fn stem_strips_unsafe_characters() {
        assert_eq!(safe_stem("Ni Made (QA)/Ops"), "ni_made_qaops");
        assert_eq!(safe_stem("Dewi-Ayu_2"), "dewi-ayu_2");
    }

    #[test]
    fn stem_drops_non_ascii_letters() {
        assert_eq!(safe_stem("José Müller"), "jos_mller");
    }

    #[test]
    fn object_name_uses_uploaded_extension() {
        let name = archive_object_name(
            "Budi Santoso",
            "Oktober",
            RecordingSlot::Directors,
            Some("budi santoso_oktober_saran_direksi.ogg"),
        );
        assert_eq!(name, "budi_santoso_oktober_saran_direksi.ogg");
    }

    #[test]
    fn object_name_defaults_to_webm() {
        assert_eq!(
            archive_object_name("Ayu", "Mei", RecordingSlot::System, None),
            "ayu_mei_saran_sistem.webm"
        );
        assert_eq!(
            archive_object_name("Ayu", "Mei", RecordingSlot::System, Some("blob")),
            "ayu_mei_saran_sistem.webm"
        );
    }

    #[test]
    fn hostile_file_names_cannot_escape_the_object_name() {
        let name = archive_object_name("Ayu", "Mei", RecordingSlot::System, Some("x.a/../b"));
        assert_eq!(name, "ayu_mei_saran_sistem.b");

        for file_name in ["clip.we?bm#x", "clip./..", "clip.%2F", "clip.WEBM/extra/long"] {
            let name = archive_object_name("Ayu", "Mei", RecordingSlot::System, Some(file_name));
            let (stem, ext) = name.rsplit_once('.').unwrap();
            assert_eq!(stem, "ayu_mei_saran_sistem");
            assert!(!ext.is_empty() && ext.len() <= 5, "{}", name);
            assert!(
                ext.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "{}",
                name
            );
        }
    }

    #[test]
    fn extension_falls_back_when_nothing_survives() {
        assert_eq!(
            archive_object_name("Ayu", "Mei", RecordingSlot::System, Some("clip./..")),
            "ayu_mei_saran_sistem.webm"
        );
        assert_eq!(file_extension("clip.M4A"), Some("m4a".to_string()));
        assert_eq!(file_extension("clip.webmwebm"), Some("webmw".to_string()));
    }

    #[test]
    fn object_name_is_deterministic() {
        let a = archive_object_name("Ayu", "Mei", RecordingSlot::System, Some("x.webm"));
        let b = archive_object_name("Ayu", "Mei", RecordingSlot::System, Some("x.webm"));
        assert_eq!(a, b);
    }
}
