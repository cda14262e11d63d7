/// Role string that marks an agent as the human-in-the-loop proxy
pub const USER_ROLE: &str = "user";

/// Round limit used when a session does not set `maxRounds`
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Keyword that ends a group chat when a message ends with it
pub const DEFAULT_TERMINATION_KEYWORD: &str = "TERMINATE";

/// Model used when an agent has no `llmConfig`
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Sampling temperature of the default LLM configuration
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Request timeout of the default LLM configuration, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Sampling seed of the default LLM configuration
pub const DEFAULT_SEED: u64 = 42;

/// Completion budget sent to providers that require one (Anthropic)
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Environment variable selecting the provider for models that cannot be inferred
pub const DEFAULT_PROVIDER_ENV: &str = "AGENT_BRIDGE_DEFAULT_PROVIDER";

/// Human reply that ends the conversation when asked for input
pub const HUMAN_EXIT_COMMAND: &str = "exit";

/// Status strings of the installation report
pub const STATUS_OK: &str = "ok";
pub const STATUS_ERROR: &str = "error";
