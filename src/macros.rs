/// Builds a [`Section`](crate::Section) from option literals.
///
/// Evaluates to `Result<Section>`: the section name and every option name
/// are validated as usual. Values may be anything implementing
/// [`ToString`]. Options are added in the order written.
///
/// # Examples
///
/// ```rust
/// use ini_lines::section;
///
/// let section = section!("server" {
///     "host" => "localhost",
///     "port" => 8080,
/// })
/// .unwrap();
///
/// assert_eq!(section.render(), "[server]\nhost = localhost\nport = 8080");
/// ```
///
/// A [`SectionOptions`](crate::SectionOptions) value can be passed after the
/// name:
///
/// ```rust
/// use ini_lines::{section, SectionOptions};
///
/// let options = SectionOptions::new().with_format("%s%s%s");
/// let section = section!("compact", options; { "a" => 1 }).unwrap();
/// assert_eq!(section.render(), "[compact]\na=1");
/// ```
#[macro_export]
macro_rules! section {
    ($name:literal { $($key:literal => $value:expr),* $(,)? }) => {
        $crate::section!($name, $crate::SectionOptions::default(); { $($key => $value),* })
    };

    ($name:literal, $options:expr; { $($key:literal => $value:expr),* $(,)? }) => {
        (|| -> $crate::Result<$crate::Section> {
            #[allow(unused_mut)]
            let mut section = $crate::Section::with_options($name, $options)?;
            $(
                section.set_option_value($key, &::std::string::ToString::to_string(&$value))?;
            )*
            Ok(section)
        })()
    };
}
