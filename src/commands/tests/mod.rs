mod options_tests;
