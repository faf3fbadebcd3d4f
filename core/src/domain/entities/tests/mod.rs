mod fund_tests;
