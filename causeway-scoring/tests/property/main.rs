mod scoring_properties;
