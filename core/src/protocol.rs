use serde::{Deserialize, Serialize};

/// Fallback-navn for identifikatorer utenfor 1–5; rapportgenerering skal
/// aldri feile på en ukjent id.
pub const UNKNOWN_TEST_NAME: &str = "test_unknown";

/// De fem kliniske testprotokollene. Lukket enum i stedet for
/// strengsammenligning spredt utover pipelinen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    CoverUncoverNear,
    CoverUncoverFar,
    AlternatingCoverNear,
    AlternatingCoverFar,
    Oculomotor,
}

impl Protocol {
    pub const ALL: [Protocol; 5] = [
        Protocol::CoverUncoverNear,
        Protocol::CoverUncoverFar,
        Protocol::AlternatingCoverNear,
        Protocol::AlternatingCoverFar,
        Protocol::Oculomotor,
    ];

    /// Brukervalg "1".."5" -> protokoll. Alt annet er ugyldig valg.
    pub fn from_choice(choice: &str) -> Option<Protocol> {
        match choice.trim() {
            "1" => Some(Protocol::CoverUncoverNear),
            "2" => Some(Protocol::CoverUncoverFar),
            "3" => Some(Protocol::AlternatingCoverNear),
            "4" => Some(Protocol::AlternatingCoverFar),
            "5" => Some(Protocol::Oculomotor),
            _ => None,
        }
    }

    /// Stabil identifikator, brukes i artefakt-filnavn.
    pub fn id(&self) -> &'static str {
        match self {
            Protocol::CoverUncoverNear => "1",
            Protocol::CoverUncoverFar => "2",
            Protocol::AlternatingCoverNear => "3",
            Protocol::AlternatingCoverFar => "4",
            Protocol::Oculomotor => "5",
        }
    }

    /// Menneskelesbart testnavn (fast oppslagstabell).
    pub fn display_name(&self) -> &'static str {
        match self {
            Protocol::CoverUncoverNear => "test1_cover_uncover_33cm",
            Protocol::CoverUncoverFar => "test2_cover_uncover_4_6m",
            Protocol::AlternatingCoverNear => "test3_alternatingcoverage_33cm",
            // det kliniske oppsettet gjenbruker test3-etiketten for fjern-varianten
            Protocol::AlternatingCoverFar => "test3_alternatingcoverage_4_6m",
            Protocol::Oculomotor => "test_oculomotor_33cm",
        }
    }

    /// Okulomotor-varianten kjører uten peak-analyse: ingen markør i
    /// tidsseriediagrammet, ingen peak-side og ingen resultatlinje.
    pub fn has_peak_analysis(&self) -> bool {
        !matches!(self, Protocol::Oculomotor)
    }
}

/// Navneoppslag for vilkårlige identifikatorer, med eksplisitt fallback.
pub fn resolve_test_name(id: &str) -> &'static str {
    Protocol::from_choice(id)
        .map(|p| p.display_name())
        .unwrap_or(UNKNOWN_TEST_NAME)
}
