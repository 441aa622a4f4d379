//! Static catalog of benchmark qrels resources.
//!
//! The catalog is a closed set: every named, versioned qrels resource the
//! toolkit knows about is a [`Dataset`] variant carrying its logical name
//! and resource kind. The set is static — no dynamic registration — so the
//! name lookup table is built once and never mutated, and the catalog is
//! safe for unsynchronized concurrent reads.
//!
//! Classic TREC collections ship with a source checkout under
//! `tools/topics-and-qrels/`; the large downloaded families (BEIR,
//! Mr.TyDi, MIRACL, CIRAL, BRIGHT, HC4, NeuCLIR) live in the per-user
//! cache directory instead. [`Dataset::path`] resolves either kind to a
//! concrete location; an external fetcher is responsible for populating
//! the cache.

mod resolve;

pub use resolve::{cache_dir, qrels_file_name, resource_len, symbol_path, BUNDLED_QRELS_DIR};

use crate::error::QrelsError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a catalog resource lives on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Shipped with a source checkout under [`BUNDLED_QRELS_DIR`]
    Bundled,
    /// Fetched into the per-user cache directory
    Cached,
}

macro_rules! datasets {
    ($($variant:ident => $name:literal,)+) => {
        /// A named, versioned qrels resource in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Dataset {
            $($variant,)+
        }

        impl Dataset {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [Dataset] = &[$(Dataset::$variant,)+];

            /// The logical dataset name, e.g. `"robust04"` or
            /// `"miracl-v1.0-ar-dev"`. Also the display name; the expected
            /// file name is derived from it.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Dataset::$variant => $name,)+
                }
            }
        }
    };
}

datasets! {
    // Early TREC ad hoc
    Trec1Adhoc => "adhoc.51-100",
    Trec2Adhoc => "adhoc.101-150",
    Trec3Adhoc => "adhoc.151-200",
    Trec4Adhoc => "adhoc.201-250",
    // Newswire
    Robust04 => "robust04",
    Robust05 => "robust05",
    Core17 => "core17",
    Core18 => "core18",
    // Web and terabyte tracks
    Wt10g => "adhoc.451-550",
    Trec2004Terabyte => "terabyte04.701-750",
    Trec2005Terabyte => "terabyte05.751-800",
    Trec2006Terabyte => "terabyte06.801-850",
    Trec2010Web => "web.51-100",
    Trec2011Web => "web.101-150",
    Trec2012Web => "web.151-200",
    Trec2013Web => "web.201-250",
    Trec2014Web => "web.251-300",
    // Microblog tracks
    Mb11 => "microblog2011",
    Mb12 => "microblog2012",
    Mb13 => "microblog2013",
    Mb14 => "microblog2014",
    // TREC CAR
    Car17V15BenchmarkY1Test => "car17v1.5.benchmarkY1test",
    Car17V20BenchmarkY1Test => "car17v2.0.benchmarkY1test",
    // TREC Deep Learning
    Trec2019DlDoc => "dl19-doc",
    Trec2019DlPassage => "dl19-passage",
    Trec2020DlDoc => "dl20-doc",
    Trec2020DlPassage => "dl20-passage",
    Trec2021DlDoc => "dl21-doc",
    Trec2021DlPassage => "dl21-passage",
    Trec2021DlDocMsmarcoV21 => "dl21-doc-msmarco-v2.1",
    Trec2022DlDoc => "dl22-doc",
    Trec2022DlPassage => "dl22-passage",
    Trec2022DlDocMsmarcoV21 => "dl22-doc-msmarco-v2.1",
    Trec2023DlDoc => "dl23-doc",
    Trec2023DlPassage => "dl23-passage",
    Trec2023DlDocMsmarcoV21 => "dl23-doc-msmarco-v2.1",
    // TREC RAG
    Trec2024RagRaggyDev => "rag24.raggy-dev",
    Trec2024RagUmbrela => "rag24.test-umbrela-all",
    Trec2024Rag => "rag24.test",
    // MS MARCO dev sets
    MsmarcoDocDev => "msmarco-doc.dev",
    MsmarcoPassageDevSubset => "msmarco-passage.dev-subset",
    MsmarcoV2DocDev => "msmarco-v2-doc.dev",
    MsmarcoV2DocDev2 => "msmarco-v2-doc.dev2",
    MsmarcoV2PassageDev => "msmarco-v2-passage.dev",
    MsmarcoV2PassageDev2 => "msmarco-v2-passage.dev2",
    MsmarcoV21DocDev => "msmarco-v2.1-doc.dev",
    MsmarcoV21DocDev2 => "msmarco-v2.1-doc.dev2",
    // Cross-language ad hoc
    Ntcir8Zh => "ntcir8.eval",
    Clef2006Fr => "clef06fr",
    Trec2002Ar => "trec02ar",
    Fire2012Bn => "fire12bn.176-225",
    Fire2012Hi => "fire12hi.176-225",
    Fire2012En => "fire12en.176-225",
    // News background linking
    Trec2018Bl => "backgroundlinking18",
    Trec2019Bl => "backgroundlinking19",
    Trec2020Bl => "backgroundlinking20",
    // TREC-COVID
    CovidRound1 => "covid-round1",
    CovidRound2 => "covid-round2",
    CovidRound3 => "covid-round3",
    CovidRound3Cumulative => "covid-round3-cumulative",
    CovidRound4 => "covid-round4",
    CovidRound4Cumulative => "covid-round4-cumulative",
    CovidRound5 => "covid-round5",
    CovidComplete => "covid-complete",
    // Mr.TyDi v1.1
    MrtydiV11ArTrain => "mrtydi-v1.1-ar.train",
    MrtydiV11ArDev => "mrtydi-v1.1-ar.dev",
    MrtydiV11ArTest => "mrtydi-v1.1-ar.test",
    MrtydiV11BnTrain => "mrtydi-v1.1-bn.train",
    MrtydiV11BnDev => "mrtydi-v1.1-bn.dev",
    MrtydiV11BnTest => "mrtydi-v1.1-bn.test",
    MrtydiV11EnTrain => "mrtydi-v1.1-en.train",
    MrtydiV11EnDev => "mrtydi-v1.1-en.dev",
    MrtydiV11EnTest => "mrtydi-v1.1-en.test",
    MrtydiV11FiTrain => "mrtydi-v1.1-fi.train",
    MrtydiV11FiDev => "mrtydi-v1.1-fi.dev",
    MrtydiV11FiTest => "mrtydi-v1.1-fi.test",
    MrtydiV11IdTrain => "mrtydi-v1.1-id.train",
    MrtydiV11IdDev => "mrtydi-v1.1-id.dev",
    MrtydiV11IdTest => "mrtydi-v1.1-id.test",
    MrtydiV11JaTrain => "mrtydi-v1.1-ja.train",
    MrtydiV11JaDev => "mrtydi-v1.1-ja.dev",
    MrtydiV11JaTest => "mrtydi-v1.1-ja.test",
    MrtydiV11KoTrain => "mrtydi-v1.1-ko.train",
    MrtydiV11KoDev => "mrtydi-v1.1-ko.dev",
    MrtydiV11KoTest => "mrtydi-v1.1-ko.test",
    MrtydiV11RuTrain => "mrtydi-v1.1-ru.train",
    MrtydiV11RuDev => "mrtydi-v1.1-ru.dev",
    MrtydiV11RuTest => "mrtydi-v1.1-ru.test",
    MrtydiV11SwTrain => "mrtydi-v1.1-sw.train",
    MrtydiV11SwDev => "mrtydi-v1.1-sw.dev",
    MrtydiV11SwTest => "mrtydi-v1.1-sw.test",
    MrtydiV11TeTrain => "mrtydi-v1.1-te.train",
    MrtydiV11TeDev => "mrtydi-v1.1-te.dev",
    MrtydiV11TeTest => "mrtydi-v1.1-te.test",
    MrtydiV11ThTrain => "mrtydi-v1.1-th.train",
    MrtydiV11ThDev => "mrtydi-v1.1-th.dev",
    MrtydiV11ThTest => "mrtydi-v1.1-th.test",
    // BEIR v1.0.0 test sets
    BeirV100TrecCovidTest => "beir-v1.0.0-trec-covid.test",
    BeirV100BioasqTest => "beir-v1.0.0-bioasq.test",
    BeirV100NfcorpusTest => "beir-v1.0.0-nfcorpus.test",
    BeirV100NqTest => "beir-v1.0.0-nq.test",
    BeirV100HotpotqaTest => "beir-v1.0.0-hotpotqa.test",
    BeirV100FiqaTest => "beir-v1.0.0-fiqa.test",
    BeirV100Signal1mTest => "beir-v1.0.0-signal1m.test",
    BeirV100TrecNewsTest => "beir-v1.0.0-trec-news.test",
    BeirV100Robust04Test => "beir-v1.0.0-robust04.test",
    BeirV100ArguanaTest => "beir-v1.0.0-arguana.test",
    BeirV100WebisTouche2020Test => "beir-v1.0.0-webis-touche2020.test",
    BeirV100CqadupstackAndroidTest => "beir-v1.0.0-cqadupstack-android.test",
    BeirV100CqadupstackEnglishTest => "beir-v1.0.0-cqadupstack-english.test",
    BeirV100CqadupstackGamingTest => "beir-v1.0.0-cqadupstack-gaming.test",
    BeirV100CqadupstackGisTest => "beir-v1.0.0-cqadupstack-gis.test",
    BeirV100CqadupstackMathematicaTest => "beir-v1.0.0-cqadupstack-mathematica.test",
    BeirV100CqadupstackPhysicsTest => "beir-v1.0.0-cqadupstack-physics.test",
    BeirV100CqadupstackProgrammersTest => "beir-v1.0.0-cqadupstack-programmers.test",
    BeirV100CqadupstackStatsTest => "beir-v1.0.0-cqadupstack-stats.test",
    BeirV100CqadupstackTexTest => "beir-v1.0.0-cqadupstack-tex.test",
    BeirV100CqadupstackUnixTest => "beir-v1.0.0-cqadupstack-unix.test",
    BeirV100CqadupstackWebmastersTest => "beir-v1.0.0-cqadupstack-webmasters.test",
    BeirV100CqadupstackWordpressTest => "beir-v1.0.0-cqadupstack-wordpress.test",
    BeirV100QuoraTest => "beir-v1.0.0-quora.test",
    BeirV100DbpediaEntityTest => "beir-v1.0.0-dbpedia-entity.test",
    BeirV100ScidocsTest => "beir-v1.0.0-scidocs.test",
    BeirV100FeverTest => "beir-v1.0.0-fever.test",
    BeirV100ClimateFeverTest => "beir-v1.0.0-climate-fever.test",
    BeirV100ScifactTest => "beir-v1.0.0-scifact.test",
    // HC4 v1.0
    Hc4V10RuDev => "hc4-v1.0-ru.dev",
    Hc4V10RuTest => "hc4-v1.0-ru.test",
    Hc4V10FaDev => "hc4-v1.0-fa.dev",
    Hc4V10FaTest => "hc4-v1.0-fa.test",
    Hc4V10ZhDev => "hc4-v1.0-zh.dev",
    Hc4V10ZhTest => "hc4-v1.0-zh.test",
    // HC4 topics over the NeuCLIR 2022 collections
    Hc4Neuclir22FaTest => "hc4-neuclir22-fa.test",
    Hc4Neuclir22RuTest => "hc4-neuclir22-ru.test",
    Hc4Neuclir22ZhTest => "hc4-neuclir22-zh.test",
    // NeuCLIR 2022
    Neuclir22Fa => "neuclir22-fa",
    Neuclir22Ru => "neuclir22-ru",
    Neuclir22Zh => "neuclir22-zh",
    // MIRACL v1.0 dev
    MiraclV10ArDev => "miracl-v1.0-ar-dev",
    MiraclV10BnDev => "miracl-v1.0-bn-dev",
    MiraclV10DeDev => "miracl-v1.0-de-dev",
    MiraclV10EnDev => "miracl-v1.0-en-dev",
    MiraclV10EsDev => "miracl-v1.0-es-dev",
    MiraclV10FaDev => "miracl-v1.0-fa-dev",
    MiraclV10FiDev => "miracl-v1.0-fi-dev",
    MiraclV10FrDev => "miracl-v1.0-fr-dev",
    MiraclV10HiDev => "miracl-v1.0-hi-dev",
    MiraclV10IdDev => "miracl-v1.0-id-dev",
    MiraclV10JaDev => "miracl-v1.0-ja-dev",
    MiraclV10KoDev => "miracl-v1.0-ko-dev",
    MiraclV10RuDev => "miracl-v1.0-ru-dev",
    MiraclV10SwDev => "miracl-v1.0-sw-dev",
    MiraclV10TeDev => "miracl-v1.0-te-dev",
    MiraclV10ThDev => "miracl-v1.0-th-dev",
    MiraclV10YoDev => "miracl-v1.0-yo-dev",
    MiraclV10ZhDev => "miracl-v1.0-zh-dev",
    // CIRAL v1.0
    CiralV10HaDev => "ciral-v1.0-ha-dev",
    CiralV10HaTestA => "ciral-v1.0-ha-test-a",
    CiralV10HaTestAPools => "ciral-v1.0-ha-test-a-pools",
    CiralV10HaTestB => "ciral-v1.0-ha-test-b",
    CiralV10SoDev => "ciral-v1.0-so-dev",
    CiralV10SoTestA => "ciral-v1.0-so-test-a",
    CiralV10SoTestAPools => "ciral-v1.0-so-test-a-pools",
    CiralV10SoTestB => "ciral-v1.0-so-test-b",
    CiralV10SwDev => "ciral-v1.0-sw-dev",
    CiralV10SwTestA => "ciral-v1.0-sw-test-a",
    CiralV10SwTestAPools => "ciral-v1.0-sw-test-a-pools",
    CiralV10SwTestB => "ciral-v1.0-sw-test-b",
    CiralV10YoDev => "ciral-v1.0-yo-dev",
    CiralV10YoTestA => "ciral-v1.0-yo-test-a",
    CiralV10YoTestAPools => "ciral-v1.0-yo-test-a-pools",
    CiralV10YoTestB => "ciral-v1.0-yo-test-b",
    // BRIGHT
    BrightBiology => "bright-biology",
    BrightEarthScience => "bright-earth-science",
    BrightEconomics => "bright-economics",
    BrightPsychology => "bright-psychology",
    BrightRobotics => "bright-robotics",
    BrightStackoverflow => "bright-stackoverflow",
    BrightSustainableLiving => "bright-sustainable-living",
    BrightPony => "bright-pony",
    BrightLeetcode => "bright-leetcode",
    BrightAops => "bright-aops",
    BrightTheoremqaTheorems => "bright-theoremqa-theorems",
    BrightTheoremqaQuestions => "bright-theoremqa-questions",
}

/// Dataset families fetched into the cache rather than shipped with a
/// checkout.
const CACHED_FAMILIES: &[&str] = &[
    "beir-", "bright-", "ciral-", "hc4-", "miracl-", "mrtydi-", "neuclir22-",
];

static BY_NAME: Lazy<HashMap<&'static str, Dataset>> = Lazy::new(|| {
    Dataset::ALL.iter().map(|d| (d.name(), *d)).collect()
});

impl Dataset {
    /// Looks up a catalog entry by its logical name.
    pub fn from_name(name: &str) -> Option<Dataset> {
        BY_NAME.get(name).copied()
    }

    /// Whether this resource is bundled with a checkout or cached.
    pub fn kind(&self) -> ResourceKind {
        if CACHED_FAMILIES.iter().any(|p| self.name().starts_with(p)) {
            ResourceKind::Cached
        } else {
            ResourceKind::Bundled
        }
    }

    /// The expected file name, e.g. `qrels.robust04.txt` or
    /// `qrels.miracl-v1.0-ar-dev.tsv`.
    pub fn file_name(&self) -> String {
        let name = self.name();
        let ext = if resolve::uses_tabs(name) { "tsv" } else { "txt" };
        format!("qrels.{name}.{ext}")
    }

    /// The resolved on-disk location for this resource.
    pub fn path(&self) -> PathBuf {
        match self.kind() {
            ResourceKind::Bundled => Path::new(BUNDLED_QRELS_DIR).join(self.file_name()),
            ResourceKind::Cached => cache_dir().join(self.file_name()),
        }
    }
}

/// Looks up a catalog entry by name, failing on anything outside the
/// enumerated catalog.
///
/// # Errors
///
/// [`QrelsError::UnrecognizedIdentifier`] for unknown names.
pub fn lookup(name: &str) -> Result<Dataset, QrelsError> {
    Dataset::from_name(name).ok_or_else(|| QrelsError::UnrecognizedIdentifier(name.to_string()))
}
