mod datasource;
