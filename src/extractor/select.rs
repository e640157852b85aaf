//! Format filtering and selection
//!
//! A format request is a quality keyword, a single itag, or an ordered list
//! of itags (one per repeated `itag` query key) where the first itag
//! present wins.

use crate::extractor::models::Format;
use std::cmp::Ordering;
use std::fmt;

/// Parsed format request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSelector {
    Highest,
    Lowest,
    HighestVideo,
    LowestVideo,
    HighestAudio,
    LowestAudio,
    Itags(Vec<String>),
}

impl FormatSelector {
    /// Missing or blank tokens select the highest quality
    pub fn parse(token: Option<&str>) -> Self {
        let token = token.map(str::trim).unwrap_or_default();
        match token {
            "" | "highest" => FormatSelector::Highest,
            "lowest" => FormatSelector::Lowest,
            "highestvideo" => FormatSelector::HighestVideo,
            "lowestvideo" => FormatSelector::LowestVideo,
            "highestaudio" => FormatSelector::HighestAudio,
            "lowestaudio" => FormatSelector::LowestAudio,
            itag => FormatSelector::Itags(vec![itag.to_string()]),
        }
    }

    /// Build from every value of a repeated `itag` parameter.
    ///
    /// One value behaves like [`FormatSelector::parse`]. Several values are
    /// taken as itags in request order.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|token| token.as_ref().trim())
            .filter(|token| !token.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => FormatSelector::Highest,
            [token] => FormatSelector::parse(Some(token)),
            many => FormatSelector::Itags(many.iter().map(|t| t.to_string()).collect()),
        }
    }
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSelector::Highest => f.write_str("highest"),
            FormatSelector::Lowest => f.write_str("lowest"),
            FormatSelector::HighestVideo => f.write_str("highestvideo"),
            FormatSelector::LowestVideo => f.write_str("lowestvideo"),
            FormatSelector::HighestAudio => f.write_str("highestaudio"),
            FormatSelector::LowestAudio => f.write_str("lowestaudio"),
            FormatSelector::Itags(itags) => f.write_str(&itags.join(",")),
        }
    }
}

/// Keep only formats carrying both audio and video
pub fn filter_muxed(formats: &[Format]) -> Vec<&Format> {
    formats.iter().filter(|f| f.is_muxed()).collect()
}

/// Pick the format matching `selector`, or `None`
pub fn choose_format<'a>(formats: &'a [Format], selector: &FormatSelector) -> Option<&'a Format> {
    match selector {
        FormatSelector::Itags(itags) => itags
            .iter()
            .find_map(|itag| formats.iter().find(|f| &f.format_id == itag)),
        FormatSelector::Highest => sorted(formats.iter(), compare_overall).first().copied(),
        FormatSelector::Lowest => sorted(formats.iter(), compare_overall).last().copied(),
        FormatSelector::HighestVideo | FormatSelector::LowestVideo => {
            let ranked = sorted(formats.iter().filter(|f| f.has_video()), compare_video);
            let pick = if *selector == FormatSelector::HighestVideo {
                ranked.first()
            } else {
                ranked.last()
            };
            // Among equal video quality, the best audio track
            let pick: &Format = *pick?;
            ranked
                .into_iter()
                .filter(|f| compare_video(f, pick) == Ordering::Equal)
                .min_by(|a, b| compare_audio(a, b))
        }
        FormatSelector::HighestAudio | FormatSelector::LowestAudio => {
            let ranked = sorted(formats.iter().filter(|f| f.has_audio()), compare_audio);
            let pick = if *selector == FormatSelector::HighestAudio {
                ranked.first()
            } else {
                ranked.last()
            };
            // Among equal audio quality, the smallest video track
            let pick: &Format = *pick?;
            ranked
                .into_iter()
                .filter(|f| compare_audio(f, pick) == Ordering::Equal)
                .min_by_key(|f| f.height.unwrap_or(0))
        }
    }
}

fn sorted<'a, I>(formats: I, cmp: fn(&Format, &Format) -> Ordering) -> Vec<&'a Format>
where
    I: Iterator<Item = &'a Format>,
{
    let mut ranked: Vec<&Format> = formats.collect();
    ranked.sort_by(|a, b| cmp(a, b));
    ranked
}

/// Best first: muxed, then any video, then by video and audio quality
pub fn compare_overall(a: &Format, b: &Format) -> Ordering {
    b.is_muxed()
        .cmp(&a.is_muxed())
        .then_with(|| b.has_video().cmp(&a.has_video()))
        .then_with(|| compare_video(a, b))
        .then_with(|| compare_audio(a, b))
}

/// Best video first
pub fn compare_video(a: &Format, b: &Format) -> Ordering {
    b.height
        .unwrap_or(0)
        .cmp(&a.height.unwrap_or(0))
        .then_with(|| desc(a.fps.unwrap_or(0.0), b.fps.unwrap_or(0.0)))
        .then_with(|| desc(a.video_bitrate(), b.video_bitrate()))
}

/// Best audio first
pub fn compare_audio(a: &Format, b: &Format) -> Ordering {
    desc(a.audio_bitrate(), b.audio_bitrate())
}

fn desc(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
