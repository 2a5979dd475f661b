pub use anyhow::{ensure, format_err, Context as _, Result};
pub use indexmap::IndexSet;
pub use itertools::Itertools as _;
pub use log::{debug, info, warn};
pub use noisy_float::prelude::*;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
};
