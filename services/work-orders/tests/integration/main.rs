
mod order_test;
mod progress_test;
mod report_test;
