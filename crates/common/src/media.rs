use crate::card::CardEntry;
use crate::modal::ModalAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Hosted on a recognized streaming site, rendered in a frame.
    Streaming(String),
    /// Raw video file played by the browser.
    Native(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Embed(String),
    Video(VideoSource),
    Image(String),
    None,
}

impl MediaKind {
    pub fn select(entry: &CardEntry, streaming_hosts: &[String]) -> Self {
        if let Some(url) = entry.embed_url() {
            return MediaKind::Embed(url.to_string());
        }
        if let Some(url) = entry.video_url() {
            let source = if is_streaming_url(url, streaming_hosts) {
                VideoSource::Streaming(url.to_string())
            } else {
                VideoSource::Native(url.to_string())
            };
            return MediaKind::Video(source);
        }
        if let Some(url) = entry.image_url() {
            return MediaKind::Image(url.to_string());
        }
        MediaKind::None
    }

    pub fn has_media(&self) -> bool {
        !matches!(self, MediaKind::None)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaKind::Embed(url) | MediaKind::Image(url) => Some(url),
            MediaKind::Video(VideoSource::Streaming(url) | VideoSource::Native(url)) => Some(url),
            MediaKind::None => None,
        }
    }

    /// The modal action behind this media's click affordance. Video and
    /// text-only cards have none.
    pub fn open_action(&self) -> Option<ModalAction> {
        match self {
            MediaKind::Embed(url) => Some(ModalAction::OpenEmbed(url.clone())),
            MediaKind::Image(url) => Some(ModalAction::OpenImage(url.clone())),
            MediaKind::Video(_) | MediaKind::None => None,
        }
    }
}

/// Host part of an absolute, protocol-relative or scheme-less URL,
/// lowercased. Relative paths have no host.
pub fn url_host(url: &str) -> Option<String> {
    let url = url.trim();
    let rest = if let Some(rest) = url.strip_prefix("//") {
        rest
    } else if url.is_empty() || url.starts_with('/') || url.starts_with('.') {
        return None;
    } else {
        match url.split_once("://") {
            Some((_, rest)) => rest,
            None => url,
        }
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

pub fn is_streaming_url(url: &str, streaming_hosts: &[String]) -> bool {
    let Some(host) = url_host(url) else {
        return false;
    };
    streaming_hosts
        .iter()
        .map(|domain| domain.trim().to_ascii_lowercase())
        .filter(|domain| !domain.is_empty())
        .any(|domain| host.contains(&domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;
    use rstest::*;

    #[fixture]
    fn hosts() -> Vec<String> {
        MediaConfig::default().streaming_hosts
    }

    fn entry(embed: Option<&str>, video: Option<&str>, image: Option<&str>) -> CardEntry {
        CardEntry {
            id: 1,
            name: "Entry".into(),
            description: "Body".into(),
            embed: embed.map(str::to_string),
            video: video.map(str::to_string),
            image: image.map(str::to_string),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(Some("/videos/clip.mp4"), None)]
    #[case(None, Some("/images/map.png"))]
    #[case(Some("/videos/clip.mp4"), Some("/images/map.png"))]
    fn test_embed_takes_precedence(
        hosts: Vec<String>,
        #[case] video: Option<&str>,
        #[case] image: Option<&str>,
    ) {
        let e = entry(Some("https://bzhang.org"), video, image);
        assert_eq!(
            e.media(&hosts),
            MediaKind::Embed("https://bzhang.org".into())
        );
    }

    #[rstest]
    fn test_video_before_image(hosts: Vec<String>) {
        let e = entry(None, Some("/videos/clip.mp4"), Some("/images/map.png"));
        assert_eq!(
            e.media(&hosts),
            MediaKind::Video(VideoSource::Native("/videos/clip.mp4".into()))
        );
    }

    #[rstest]
    fn test_image_only(hosts: Vec<String>) {
        let e = entry(None, None, Some("/images/map.png"));
        assert_eq!(e.media(&hosts), MediaKind::Image("/images/map.png".into()));
    }

    #[rstest]
    fn test_no_media(hosts: Vec<String>) {
        let kind = entry(None, None, None).media(&hosts);
        assert_eq!(kind, MediaKind::None);
        assert!(!kind.has_media());
        assert_eq!(kind.url(), None);
    }

    #[rstest]
    fn test_empty_fields_count_as_absent(hosts: Vec<String>) {
        let e = entry(Some(""), Some(""), Some("/images/map.png"));
        assert_eq!(e.media(&hosts), MediaKind::Image("/images/map.png".into()));
    }

    #[rstest]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ", true)]
    #[case("https://youtu.be/dQw4w9WgXcQ", true)]
    #[case("https://player.vimeo.com/video/76979871", true)]
    #[case("youtube.com/watch?v=abc", true)]
    #[case("//www.youtube.com/embed/dQw4w9WgXcQ", true)]
    #[case("//player.vimeo.com/video/76979871", true)]
    #[case("/videos/Fall_Guys_Recording.mp4", false)]
    #[case("https://cdn.example.com/clip.mp4", false)]
    #[case("https://cdn.example.com/youtube.com/clip.mp4", false)]
    fn test_streaming_classification(hosts: Vec<String>, #[case] url: &str, #[case] streaming: bool) {
        assert_eq!(is_streaming_url(url, &hosts), streaming);

        let kind = entry(None, Some(url), None).media(&hosts);
        let expected = if streaming {
            MediaKind::Video(VideoSource::Streaming(url.into()))
        } else {
            MediaKind::Video(VideoSource::Native(url.into()))
        };
        assert_eq!(kind, expected);
    }

    #[rstest]
    #[case("https://user@Example.COM:8080/path", Some("example.com"))]
    #[case("http://bzhang.org?x=1", Some("bzhang.org"))]
    #[case("/relative/path.mp4", None)]
    #[case("//www.YouTube.com/embed/x", Some("www.youtube.com"))]
    #[case("///videos/clip.mp4", None)]
    #[case("", None)]
    fn test_url_host(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(url_host(url).as_deref(), expected);
    }

    #[rstest]
    fn test_embed_expand_opens_embed_modal(hosts: Vec<String>) {
        let kind = entry(Some("https://bzhang.org"), None, None).media(&hosts);
        let action = kind.open_action().expect("embed has an expand control");
        assert_eq!(action, ModalAction::OpenEmbed("https://bzhang.org".into()));

        let state = crate::modal::ModalState::default().apply(action);
        assert_eq!(state, crate::modal::ModalState::OpenEmbed("https://bzhang.org".into()));
    }

    #[rstest]
    fn test_image_click_opens_image_modal(hosts: Vec<String>) {
        let kind = entry(None, None, Some("/images/map.png")).media(&hosts);
        assert_eq!(
            kind.open_action(),
            Some(ModalAction::OpenImage("/images/map.png".into()))
        );
    }

    #[rstest]
    #[case(Some("/videos/Fall_Guys_Recording.mp4"))]
    #[case(Some("https://www.youtube.com/embed/x"))]
    #[case(None)]
    fn test_video_and_text_have_no_modal(hosts: Vec<String>, #[case] video: Option<&str>) {
        assert_eq!(entry(None, video, None).media(&hosts).open_action(), None);
    }

    #[test]
    fn test_custom_streaming_hosts() {
        let hosts = vec!["twitch.tv".to_string()];
        assert!(is_streaming_url("https://player.twitch.tv/?video=1", &hosts));
        assert!(!is_streaming_url("https://www.youtube.com/embed/x", &hosts));
    }
}
