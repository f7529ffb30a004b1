/// Id of the container the page is mounted into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Name of the global stylesheet; doubles as the id of its `<style>` element.
pub const GLOBAL_STYLE_ID: &str = "GlobalStyles";

pub const LOGO_ALT: &str = "Skalable Logo";

pub const LOGO_SRC: &str = "https://storage.googleapis.com/skalable.appspot.com/Kotlin%20JS%20Global%20Styles/SkalableDev_SkalableDev.png";

pub const PAGE_TITLE: &str = "Skalable";

/// Prefix for environment overrides (`SKALABLE__PAGE__ROOT_ID`).
pub const ENV_PREFIX: &str = "SKALABLE";

pub const DEFAULT_OUTPUT: &str = "dist/index.html";
