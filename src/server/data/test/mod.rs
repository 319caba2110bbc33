mod survey_response;
