use super::Client;
use crate::{
    parse,
    query::{
        endpoint, CallAnalysisGnisQuery, CallAnalysisWdidQuery, SourceRouteAnalysisQuery,
        SourceRouteFrameworkQuery,
    },
    transport::Transport,
    types::{CallAnalysis, CallAnalysisKind, RouteAnalysis, SourceRoute},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches the call analysis of a right at a structure. A batched query
    /// is sent as one request per calendar year and the results are
    /// concatenated in order.
    pub fn get_call_analysis_wdid(
        &self,
        query: &CallAnalysisWdidQuery,
    ) -> Result<Vec<CallAnalysis>, Error> {
        let mut analyses = Vec::new();
        for request in query.requests()? {
            analyses.extend(self.fetch(&endpoint::CALL_ANALYSIS_WDID, &request, |raw| {
                parse::call_analysis(raw, CallAnalysisKind::Wdid)
            })?);
        }
        Ok(analyses)
    }

    /// Same as [`Client::get_call_analysis_wdid`] for a point on a stream.
    pub fn get_call_analysis_gnisid(
        &self,
        query: &CallAnalysisGnisQuery,
    ) -> Result<Vec<CallAnalysis>, Error> {
        let mut analyses = Vec::new();
        for request in query.requests()? {
            analyses.extend(self.fetch(&endpoint::CALL_ANALYSIS_GNIS, &request, |raw| {
                parse::call_analysis(raw, CallAnalysisKind::Gnis)
            })?);
        }
        Ok(analyses)
    }

    pub fn get_source_route_framework(
        &self,
        query: &SourceRouteFrameworkQuery,
    ) -> Result<Vec<SourceRoute>, Error> {
        self.fetch(&endpoint::SOURCE_ROUTE_FRAMEWORK, query, parse::source_route)
    }

    /// Fetches the structures between a lower and an upper stream point.
    pub fn get_source_route_analysis(
        &self,
        query: &SourceRouteAnalysisQuery,
    ) -> Result<Vec<RouteAnalysis>, Error> {
        self.fetch(&endpoint::SOURCE_ROUTE_ANALYSIS, query, parse::route_analysis)
    }
}
