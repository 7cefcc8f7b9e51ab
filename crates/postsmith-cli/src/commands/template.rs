use postsmith_application::TemplateKind;

/// Prints a helper template to stdout. The file name goes to stderr so the
/// body can be redirected straight into a file.
pub fn print(kind: TemplateKind) {
    eprintln!("# {}", kind.file_name());
    print!("{}", kind.body());
}
