use std::process::ExitCode;

fn main() -> ExitCode {
    diem_csv_lib::run()
}
