#[macro_export]
macro_rules! debug {
    ($context:expr, $template:literal, $($value:expr),+) => {
        if $context.options().debug {
            $crate::log!($context, $template, $($value),+);
        }
    };
}

/// Writes a message to the console's standard error.
///
/// Write failures are discarded so that logs never change results.
#[macro_export]
macro_rules! log {
    ($context:expr, $template:literal, $($value:expr),+) => {
        let _ = $context
            .console()
            .lock()
            .await
            .write_stderr(
                ("nobuild: ".to_owned() + &format!($template, $($value),+) + "\n").as_bytes(),
            )
            .await;
    };
}
