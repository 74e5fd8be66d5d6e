//! Attachment resolution and the filename-derived hi-res heuristic.

use url::Url;

use crate::api::types::Attachment;
use crate::identity::Platform;

/// Output lines produced from one post's attachment list.
#[derive(Debug, Default)]
pub struct AttachmentLines {
    /// Entries for the attachments stream. In annotated mode an entry spans
    /// two physical lines (`<url>\n out=<name>`).
    pub lines: Vec<String>,

    /// How many of the entries came from the hi-res heuristic.
    pub hi_res_count: u64,
}

/// Resolve one post's attachments into output lines.
///
/// Every attachment gets a direct platform link. With link discovery enabled,
/// each declared filename is additionally tried as an absolute URL; filenames
/// that parse with a scheme yield a second, independent candidate link
/// appended to the same stream.
pub fn resolve_attachments(
    platform: Platform,
    attachments: &[Attachment],
    annotated: bool,
    link_discovery: bool,
) -> AttachmentLines {
    let mut result = AttachmentLines::default();

    for attachment in attachments {
        let direct = format!("https://{}.party{}", platform, attachment.path);
        if annotated {
            result.lines.push(format!("{}\n out={}", direct, attachment.name));
        } else {
            result.lines.push(direct);
        }
    }

    if link_discovery {
        for attachment in attachments {
            if let Some((link, out_name)) = derive_hi_res_link(&attachment.name) {
                if annotated {
                    result.lines.push(format!("{}\n out={}", link, out_name));
                } else {
                    result.lines.push(link);
                }
                result.hi_res_count += 1;
            }
        }
    }

    result
}

/// Interpret a declared filename as an absolute URL and derive a secondary
/// link candidate from it: `(link, display_name)`.
///
/// Best-effort and provider-specific. A filename that happens to parse as a
/// URL but is not a meaningful secondary resource still yields a harmless
/// link; there is no verification step.
fn derive_hi_res_link(name: &str) -> Option<(String, String)> {
    // Plain filenames fail the absolute-URL parse and are skipped.
    let parsed = Url::parse(name).ok()?;

    let scheme = parsed.scheme();
    let host = parsed.host_str()?;
    let path = parsed.path();
    let out_name = path.trim_start_matches('/').to_string();

    // Imgur specific: "fbplay" in the query marks a video-preview thumbnail,
    // so swap the path's extension for .mp4 to aim at the full video.
    let link = if parsed.query().is_some_and(|q| q.contains("fbplay")) {
        let stem = path.split('.').next().unwrap_or(path);
        format!("{}://{}{}.mp4", scheme, host, stem)
    } else {
        // Query and fragment dropped.
        format!("{}://{}{}", scheme, host, path)
    };

    Some((link, out_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str, path: &str) -> Attachment {
        Attachment {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_direct_link_plain() {
        let atts = [attachment("pic.jpg", "/data/ab/pic.jpg")];
        let result = resolve_attachments(Platform::Kemono, &atts, false, false);
        assert_eq!(result.lines, vec!["https://kemono.party/data/ab/pic.jpg"]);
        assert_eq!(result.hi_res_count, 0);
    }

    #[test]
    fn test_direct_link_annotated() {
        let atts = [attachment("pic.jpg", "/data/ab/pic.jpg")];
        let result = resolve_attachments(Platform::Coomer, &atts, true, false);
        assert_eq!(
            result.lines,
            vec!["https://coomer.party/data/ab/pic.jpg\n out=pic.jpg"]
        );
    }

    #[test]
    fn test_plain_filename_never_discovers() {
        let atts = [attachment("just_a_file.png", "/data/x.png")];
        let result = resolve_attachments(Platform::Kemono, &atts, false, true);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.hi_res_count, 0);
    }

    #[test]
    fn test_filename_as_url_discovered() {
        let atts = [attachment(
            "https://i.imgur.com/abcdef.jpg?tag=1#frag",
            "/data/x.jpg",
        )];
        let result = resolve_attachments(Platform::Kemono, &atts, false, true);
        assert_eq!(result.lines.len(), 2);
        // Query and fragment are dropped from the derived link.
        assert_eq!(result.lines[1], "https://i.imgur.com/abcdef.jpg");
        assert_eq!(result.hi_res_count, 1);
    }

    #[test]
    fn test_fbplay_rewrites_to_mp4() {
        let (link, out_name) =
            derive_hi_res_link("http://imgur.com/abc.jpg?fbplay=1").unwrap();
        assert_eq!(link, "http://imgur.com/abc.mp4");
        assert_eq!(out_name, "abc.jpg");
    }

    #[test]
    fn test_fbplay_without_extension_still_appends_mp4() {
        let (link, _) = derive_hi_res_link("http://imgur.com/abc?fbplay").unwrap();
        assert_eq!(link, "http://imgur.com/abc.mp4");
    }

    #[test]
    fn test_annotated_hi_res_uses_parsed_path() {
        let atts = [attachment("https://i.imgur.com/abcdef.jpg", "/data/x.jpg")];
        let result = resolve_attachments(Platform::Kemono, &atts, true, true);
        assert_eq!(result.lines[1], "https://i.imgur.com/abcdef.jpg\n out=abcdef.jpg");
    }

    #[test]
    fn test_direct_lines_precede_hi_res_lines() {
        let atts = [
            attachment("https://i.imgur.com/a.jpg", "/data/a.jpg"),
            attachment("b.jpg", "/data/b.jpg"),
        ];
        let result = resolve_attachments(Platform::Kemono, &atts, false, true);
        assert_eq!(
            result.lines,
            vec![
                "https://kemono.party/data/a.jpg",
                "https://kemono.party/data/b.jpg",
                "https://i.imgur.com/a.jpg",
            ]
        );
    }
}
