//! Query pipeline: tag filtering, corpus assembly and ranking.

use super::{timestamp_chunks, transcript_chunks, Ranker, SearchHit};
use crate::cache::{EmbeddingCache, EmbeddingStore, FsEmbeddingStore};
use crate::catalog::{Catalog, FsCatalog, TagFilter};
use crate::config::Settings;
use crate::embedding::{Embedder, OpenAIEmbedder};
use crate::error::Result;
use crate::media::Video;
use crate::nlp::{clean_text, Lemmatizer, NoopLemmatizer, SpellChecker, YandexSpeller};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Result of a pipeline run.
#[derive(Debug)]
pub enum SearchOutcome {
    /// No videos matched the tag filters; ranking never ran.
    NoVideos,
    /// Ranked hits per corpus. `None` means nothing in that corpus cleared
    /// the similarity threshold.
    Ranked {
        timestamp_hits: Option<Vec<SearchHit>>,
        transcript_hits: Option<Vec<SearchHit>>,
    },
}

/// Orchestrates a query: catalog filter, corpus assembly, ranking.
pub struct QueryPipeline {
    catalog: Arc<dyn Catalog>,
    embedder: Arc<dyn Embedder>,
    cache: EmbeddingCache,
    ranker: Ranker,
    speller: Option<Arc<dyn SpellChecker>>,
    settings: Settings,
}

impl QueryPipeline {
    /// Create a pipeline with the default components: filesystem catalog
    /// and cache, OpenAI embedder, remote speller when enabled.
    pub fn new(settings: Settings) -> Result<Self> {
        let embedder: Arc<dyn Embedder> = Arc::new(OpenAIEmbedder::from_settings(&settings.embedding));
        let store: Arc<dyn EmbeddingStore> = Arc::new(FsEmbeddingStore::new(settings.cache_dir())?);
        let catalog: Arc<dyn Catalog> = Arc::new(FsCatalog::new(settings.catalog_root()));
        let speller: Option<Arc<dyn SpellChecker>> = settings.speller.enabled.then(|| {
            Arc::new(YandexSpeller::new(
                &settings.speller.endpoint,
                &settings.speller.lang,
            )) as Arc<dyn SpellChecker>
        });

        Ok(Self::with_components(
            settings,
            catalog,
            embedder,
            store,
            Arc::new(NoopLemmatizer),
            speller,
        ))
    }

    /// Create a pipeline with custom components (tests inject stubs here).
    pub fn with_components(
        settings: Settings,
        catalog: Arc<dyn Catalog>,
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn EmbeddingStore>,
        lemmatizer: Arc<dyn Lemmatizer>,
        speller: Option<Arc<dyn SpellChecker>>,
    ) -> Self {
        let cache = EmbeddingCache::new(store, embedder.clone());
        let ranker = Ranker::new(
            embedder.clone(),
            lemmatizer,
            &settings.search.platform_url,
        );
        Self {
            catalog,
            embedder,
            cache,
            ranker,
            speller,
            settings,
        }
    }

    /// Videos matching the playlist and video tag filters.
    pub async fn matching_videos(
        &self,
        playlist_filter: &TagFilter,
        video_filter: &TagFilter,
    ) -> Result<Vec<Video>> {
        let playlists = self.catalog.fetch_playlists(playlist_filter).await?;
        let mut videos = Vec::new();
        for playlist in &playlists {
            videos.extend(self.catalog.fetch_videos(playlist, video_filter).await?);
        }
        Ok(videos)
    }

    /// Run a query: filter the catalog, assemble the timecode and transcript
    /// corpora, rank each against the query.
    #[instrument(skip(self, playlist_filter, video_filter))]
    pub async fn search(
        &self,
        query: &str,
        playlist_filter: &TagFilter,
        video_filter: &TagFilter,
        threshold: Option<f32>,
    ) -> Result<SearchOutcome> {
        let threshold = threshold.unwrap_or(self.settings.search.threshold);

        let videos = self.matching_videos(playlist_filter, video_filter).await?;
        if videos.is_empty() {
            info!("No videos matched the tag filters");
            return Ok(SearchOutcome::NoVideos);
        }
        info!("Ranking against {} videos", videos.len());

        let query = self.correct_query(query).await;

        let timestamp_hits = self.rank_timestamp_corpus(&query, &videos, threshold).await?;
        let transcript_hits = self.rank_transcript_corpus(&query, &videos, threshold).await?;

        Ok(SearchOutcome::Ranked {
            timestamp_hits,
            transcript_hits,
        })
    }

    /// Spell-correct the query, falling back to the original on any speller
    /// failure. Correction is best-effort, never fatal.
    async fn correct_query(&self, query: &str) -> String {
        let Some(speller) = &self.speller else {
            return query.to_string();
        };
        match speller.correct(query).await {
            Ok(corrected) => {
                if corrected != query {
                    info!("Corrected query: {}", corrected);
                }
                corrected
            }
            Err(e) => {
                warn!("Spell correction failed, using query as-is: {}", e);
                query.to_string()
            }
        }
    }

    /// Corpus from hand-authored timecodes, embedded on the fly (one batch
    /// call per video).
    async fn rank_timestamp_corpus(
        &self,
        query: &str,
        videos: &[Video],
        threshold: f32,
    ) -> Result<Option<Vec<SearchHit>>> {
        let mut embeddings = Vec::new();
        let mut chunks = Vec::new();

        for video in videos {
            if video.timestamps.is_empty() {
                continue;
            }
            let texts: Vec<String> = video
                .timestamps
                .iter()
                .map(|ts| clean_text(&ts.label))
                .collect();
            embeddings.extend(self.embedder.embed_batch(&texts).await?);
            chunks.extend(timestamp_chunks(video));
        }

        self.ranker
            .rank(
                query,
                &embeddings,
                &chunks,
                threshold,
                self.settings.search.score_offset,
            )
            .await
    }

    /// Corpus from transcripts, with embeddings served by the compute-once
    /// cache.
    async fn rank_transcript_corpus(
        &self,
        query: &str,
        videos: &[Video],
        threshold: f32,
    ) -> Result<Option<Vec<SearchHit>>> {
        let mut embeddings = Vec::new();
        let mut chunks = Vec::new();

        for video in videos {
            let Some(transcript) = &video.transcript else {
                continue;
            };
            self.cache
                .ensure_cached(&video.id, &transcript.texts())
                .await?;
            embeddings.extend(self.cache.load(&video.id).await?);
            chunks.extend(transcript_chunks(video));
        }

        self.ranker
            .rank(
                query,
                &embeddings,
                &chunks,
                threshold,
                self.settings.search.score_offset,
            )
            .await
    }
}
