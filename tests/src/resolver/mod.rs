mod diagnostics;
mod paths;
