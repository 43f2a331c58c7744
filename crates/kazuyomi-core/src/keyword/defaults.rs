//! Built-in keyword set.

use crate::types::ElementCategory;

use super::manager::{KeywordManager, KeywordOptions};

const SEASON_PREFIXES: &[&str] = &["SAISON", "SEASON"];

const ANIME_TYPES: &[&str] = &[
    "GEKIJOUBAN", "MOVIE", "OAD", "OAV", "ONA", "OVA", "SPECIAL", "SPECIALS", "TV",
];
// "Yumeiro Patissiere SP Professional"
const ANIME_TYPES_UNSEARCHABLE: &[&str] = &["SP"];
const ANIME_TYPES_INVALID: &[&str] = &[
    "ED", "ENDING", "NCED", "NCOP", "OP", "OPENING", "PREVIEW", "PV",
];

const AUDIO_TERMS: &[&str] = &[
    // Channels
    "2.0CH", "2CH", "5.1", "5.1CH", "DTS", "DTS-ES", "DTS5.1", "TRUEHD5.1",
    // Codecs
    "AAC", "AACX2", "AACX3", "AACX4", "AC3", "EAC3", "E-AC-3", "FLAC", "FLACX2", "FLACX3",
    "FLACX4", "LOSSLESS", "MP3", "OGG", "VORBIS",
    // Language
    "DUALAUDIO", "DUAL AUDIO",
];

const DEVICE_COMPATIBILITY: &[&str] = &["IPAD3", "IPHONE5", "IPOD", "PS3", "XBOX", "XBOX360"];
const DEVICE_COMPATIBILITY_UNIDENTIFIABLE: &[&str] = &["ANDROID"];

const EPISODE_PREFIXES: &[&str] = &[
    "EP", "EP.", "EPS", "EPS.", "EPISODE", "EPISODE.", "EPISODES", "CAPITULO", "EPISODIO",
    "FOLGE",
];
// Single-letter forms only count when glued to a number.
const EPISODE_PREFIXES_INVALID: &[&str] = &["E", "\u{7B2C}"];

const FILE_EXTENSIONS: &[&str] = &[
    "3GP", "AVI", "DIVX", "FLV", "M2TS", "MKV", "MOV", "MP4", "MPG", "OGM", "RM", "RMVB", "TS",
    "WEBM", "WMV",
];
const FILE_EXTENSIONS_INVALID: &[&str] = &[
    "AAC", "AIFF", "FLAC", "M4A", "MP3", "MKA", "OGG", "WAV", "WMA", "7Z", "RAR", "ZIP", "ASS",
    "SRT",
];

const LANGUAGES: &[&str] = &["ENG", "ENGLISH", "ESPANOL", "JAP", "PT-BR", "SPANISH", "VOSTFR"];
// "Tokyo ESP", "Bokura ga Ita"
const LANGUAGES_UNIDENTIFIABLE: &[&str] = &["ESP", "ITA"];

const OTHER: &[&str] = &[
    "REMASTER", "REMASTERED", "UNCENSORED", "UNCUT", "TS", "VFR", "WIDESCREEN", "WS",
];

const RELEASE_GROUPS: &[&str] = &["THORA"];

const RELEASE_INFORMATION: &[&str] = &["BATCH", "COMPLETE", "PATCH", "REMUX"];
// "The End of Evangelion", "Final Approach"
const RELEASE_INFORMATION_UNIDENTIFIABLE: &[&str] = &["END", "FINAL"];

const RELEASE_VERSIONS: &[&str] = &["V0", "V1", "V2", "V3", "V4"];

const SOURCES: &[&str] = &[
    "BD", "BDRIP", "BLURAY", "BLU-RAY", "DVD", "DVD5", "DVD9", "DVD-R2J", "DVDRIP", "DVD-RIP",
    "R2DVD", "R2J", "R2JDVD", "R2JDVDRIP", "HDTV", "HDTVRIP", "TVRIP", "TV-RIP", "WEBCAST",
    "WEBRIP", "WEB-DL", "WEBDL",
];

const SUBTITLES: &[&str] = &[
    "ASS", "BIG5", "DUB", "DUBBED", "HARDSUB", "HARDSUBS", "RAW", "SOFTSUB", "SOFTSUBS", "SUB",
    "SUBBED", "SUBTITLED",
];

const VIDEO_TERMS: &[&str] = &[
    // Frame rate
    "23.976FPS", "24FPS", "29.97FPS", "30FPS", "60FPS", "120FPS",
    // Codec
    "8BIT", "8-BIT", "10BIT", "10BITS", "10-BIT", "10-BITS", "HI10", "HI10P", "HI444", "HI444P",
    "HI444PP", "H264", "H265", "H.264", "H.265", "X264", "X265", "X.264", "AVC", "HEVC", "HEVC2",
    "AV1", "VP9", "DIVX", "DIVX5", "DIVX6", "XVID",
    // Format
    "AVI", "RMVB", "WMV", "WMV3", "WMV9",
    // Quality
    "HQ", "LQ",
    // Resolution
    "HD", "SD",
];

const VOLUME_PREFIXES: &[&str] = &["VOL", "VOL.", "VOLUME"];

/// Registers the built-in keyword set.
pub(super) fn register_defaults(manager: &mut KeywordManager) {
    use ElementCategory as C;
    use KeywordOptions as O;

    let groups: &[(ElementCategory, KeywordOptions, &[&str])] = &[
        (C::AnimeSeasonPrefix, O::UNIDENTIFIABLE, SEASON_PREFIXES),
        (C::AnimeType, O::UNIDENTIFIABLE, ANIME_TYPES),
        (C::AnimeType, O::UNIDENTIFIABLE_UNSEARCHABLE, ANIME_TYPES_UNSEARCHABLE),
        (C::AnimeType, O::UNIDENTIFIABLE_INVALID, ANIME_TYPES_INVALID),
        (C::AudioTerm, O::DEFAULT, AUDIO_TERMS),
        (C::DeviceCompatibility, O::DEFAULT, DEVICE_COMPATIBILITY),
        (C::DeviceCompatibility, O::UNIDENTIFIABLE, DEVICE_COMPATIBILITY_UNIDENTIFIABLE),
        (C::EpisodePrefix, O::DEFAULT, EPISODE_PREFIXES),
        (C::EpisodePrefix, O::INVALID, EPISODE_PREFIXES_INVALID),
        (C::FileExtension, O::DEFAULT, FILE_EXTENSIONS),
        (C::FileExtension, O::INVALID, FILE_EXTENSIONS_INVALID),
        (C::Language, O::DEFAULT, LANGUAGES),
        (C::Language, O::UNIDENTIFIABLE, LANGUAGES_UNIDENTIFIABLE),
        (C::Other, O::DEFAULT, OTHER),
        (C::ReleaseGroup, O::DEFAULT, RELEASE_GROUPS),
        (C::ReleaseInformation, O::DEFAULT, RELEASE_INFORMATION),
        (C::ReleaseInformation, O::UNIDENTIFIABLE, RELEASE_INFORMATION_UNIDENTIFIABLE),
        (C::ReleaseVersion, O::DEFAULT, RELEASE_VERSIONS),
        (C::Source, O::DEFAULT, SOURCES),
        (C::Subtitles, O::DEFAULT, SUBTITLES),
        (C::VideoTerm, O::DEFAULT, VIDEO_TERMS),
        (C::VolumePrefix, O::DEFAULT, VOLUME_PREFIXES),
    ];

    for &(category, options, keywords) in groups {
        manager.register(category, options, keywords.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_keywords_are_registered() {
        let manager = KeywordManager::new();
        for prefix in EPISODE_PREFIXES.iter().chain(EPISODE_PREFIXES_INVALID) {
            assert!(manager.contains(ElementCategory::EpisodePrefix, prefix), "{prefix}");
        }
        for prefix in VOLUME_PREFIXES {
            assert!(manager.contains(ElementCategory::VolumePrefix, prefix), "{prefix}");
        }
        assert!(manager.contains(ElementCategory::AnimeSeasonPrefix, "SEASON"));
    }

    #[test]
    fn overlapping_terms_live_in_separate_partitions() {
        let manager = KeywordManager::new();
        // "TS" is an extension and an "other" term; "AVI" an extension and a video term.
        assert!(manager.contains(ElementCategory::FileExtension, "TS"));
        assert!(manager.contains(ElementCategory::Other, "TS"));
        assert!(manager.contains(ElementCategory::VideoTerm, "AVI"));
        assert!(manager.contains(ElementCategory::Subtitles, "ASS"));
        assert!(manager.contains(ElementCategory::ReleaseGroup, "THORA"));
    }
}
