mod request_tests;
