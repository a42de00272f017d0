use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Scoopcast Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::session::get_session,
        crate::routes::session::select_mode,
        crate::routes::session::list_modes,
        crate::routes::round::next,
        crate::routes::round::previous,
        crate::routes::round::reveal,
        crate::routes::round::select_option,
        crate::routes::scores::adjust_score,
        crate::routes::scores::leaderboard,
        crate::routes::sse::event_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::session::SessionResponse,
            crate::dto::session::RoundView,
            crate::dto::session::ItemView,
            crate::dto::session::AnswerView,
            crate::dto::session::ModesResponse,
            crate::dto::session::ModeSummary,
            crate::dto::session::SelectModeRequest,
            crate::dto::session::SelectOptionRequest,
            crate::dto::score::ScoreAdjustmentRequest,
            crate::dto::score::ScoreUpdateResponse,
            crate::dto::score::LeaderboardResponse,
            crate::dto::score::ScoreEntry,
            crate::dto::phase::VisibleRoundPhase,
            crate::dto::phase::VisibleRevealCause,
            crate::dto::sse::ModeChangedEvent,
            crate::dto::sse::RoundStartedEvent,
            crate::dto::sse::RoundTickEvent,
            crate::dto::sse::RoundRevealedEvent,
            crate::dto::sse::OptionSelectedEvent,
            crate::dto::sse::ScoreAdjustedEvent,
            crate::state::game::Player,
            crate::state::game::GameMode,
            crate::state::game::QuizItem,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "session", description = "Session snapshot and mode selection"),
        (name = "round", description = "Round navigation, reveal and riddle options"),
        (name = "scores", description = "Score ledger"),
        (name = "sse", description = "Server-sent events stream"),
    )
)]
pub struct ApiDoc;
