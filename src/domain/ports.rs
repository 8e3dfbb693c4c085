/// Where the engine finds its file pair.
pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn monitor_enabled(&self) -> bool {
        false
    }
}
