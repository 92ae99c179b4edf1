mod environment_test;
mod quiz_response_test;
